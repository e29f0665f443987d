// ─── WASM implementation ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
mod wasm_impl {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    pub async fn fetch_text(url: &str) -> Result<String, String> {
        let opts = web_sys::RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(web_sys::RequestMode::SameOrigin);

        let request = web_sys::Request::new_with_str_and_init(url, &opts)
            .map_err(|e| format!("Failed to create request: {:?}", e))?;

        let window = web_sys::window().ok_or("No window")?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| format!("Fetch failed: {:?}", e))?;

        let resp: web_sys::Response = resp_value
            .dyn_into()
            .map_err(|_| "Response is not a Response object".to_string())?;

        let status = resp.status();
        if !resp.ok() {
            return Err(format!("HTTP {} for {}", status, url));
        }

        let text = JsFuture::from(
            resp.text().map_err(|e| format!("Failed to get text: {:?}", e))?,
        )
        .await
        .map_err(|e| format!("Failed to read body: {:?}", e))?;

        text.as_string()
            .ok_or("Response body is not a string".to_string())
    }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// GET a same-origin text resource.
///
/// Every failure kind (transport, non-success status, unreadable body) comes
/// back as `Err`; callers decide how to degrade.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    #[cfg(target_family = "wasm")]
    {
        wasm_impl::fetch_text(url).await
    }
    #[cfg(not(target_family = "wasm"))]
    {
        Err(format!("Fetch only available in WASM builds: {url}"))
    }
}
