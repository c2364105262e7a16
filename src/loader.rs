use crate::core::asset::{self, BufferSlot};
use crate::core::{LoadError, LoadProgress, ModelAsset};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub type ProgressFn = Rc<dyn Fn(LoadProgress)>;

fn fetch_error(url: &str, e: JsValue) -> LoadError {
    LoadError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    }
}

/// GET `url` as an ArrayBuffer, reporting XHR progress events.
pub async fn fetch_bytes(url: &str, on_progress: Option<ProgressFn>) -> Result<Vec<u8>, LoadError> {
    let xhr = web::XmlHttpRequest::new().map_err(|e| fetch_error(url, e))?;
    xhr.open_with_async("GET", url, true)
        .map_err(|e| fetch_error(url, e))?;
    xhr.set_response_type(web::XmlHttpRequestResponseType::Arraybuffer);

    let progress_closure = on_progress.map(|cb| {
        let closure = Closure::wrap(Box::new(move |ev: web::ProgressEvent| {
            cb(LoadProgress {
                loaded: ev.loaded() as u64,
                total: ev.length_computable().then(|| ev.total() as u64),
            });
        }) as Box<dyn FnMut(web::ProgressEvent)>);
        xhr.set_onprogress(Some(closure.as_ref().unchecked_ref()));
        closure
    });

    let done = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move |ev: JsValue| {
            _ = reject.call1(&JsValue::NULL, &ev);
        });
        xhr.set_onload(Some(onload.unchecked_ref()));
        xhr.set_onerror(Some(onerror.unchecked_ref()));
    });
    xhr.send().map_err(|e| fetch_error(url, e))?;
    let outcome = JsFuture::from(done).await;

    xhr.set_onprogress(None);
    drop(progress_closure);
    outcome.map_err(|_| LoadError::Fetch {
        url: url.to_string(),
        reason: "network error".into(),
    })?;

    let status = xhr.status().map_err(|e| fetch_error(url, e))?;
    // status 0 is what file:// and some local servers report on success
    if status != 0 && !(200..300).contains(&status) {
        return Err(LoadError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = xhr.response().map_err(|e| fetch_error(url, e))?;
    Ok(js_sys::Uint8Array::new(&body).to_vec())
}

/// Fetch the glTF document at `url` plus every external buffer it references.
pub async fn load_model(url: &str, on_progress: ProgressFn) -> Result<ModelAsset, LoadError> {
    let bytes = fetch_bytes(url, Some(on_progress.clone())).await?;
    let doc = asset::parse_document(&bytes)?;
    let slots = asset::plan_buffers(&doc, url)?;
    let mut buffers = Vec::with_capacity(slots.len());
    for slot in slots {
        match slot {
            BufferSlot::Ready(data) => buffers.push(data),
            BufferSlot::Fetch(buffer_url) => {
                log::info!("[loader] fetching buffer {}", buffer_url);
                buffers.push(fetch_bytes(&buffer_url, Some(on_progress.clone())).await?);
            }
        }
    }
    let model = asset::build_model(&doc, &buffers)?;
    log::info!(
        "[loader] {} loaded: {} parts, {} triangles",
        url,
        model.parts.len(),
        model.triangle_count()
    );
    Ok(model)
}
