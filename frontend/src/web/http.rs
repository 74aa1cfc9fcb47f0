//! 浏览器 HTTP 客户端
//!
//! 基于 `gloo-net` 的 fetch 封装，实现客户端核心的 [`HttpClient`] trait。

use folio_dash::{ApiError, ApiResult, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::{Request, RequestBuilder};

/// fetch 实现
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let mut rb = builder(req.method, &req.url);
        for (k, v) in &req.headers {
            rb = rb.header(k, v);
        }

        let request = match req.body {
            Some(body) => rb.body(body),
            None => rb.build(),
        }
        .map_err(|e| ApiError::network(format!("failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
