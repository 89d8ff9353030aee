use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
    Response,
};

const DEFAULT_USER_AGENT: &str = concat!("loadout/", env!("CARGO_PKG_VERSION"));

#[allow(async_fn_in_trait)]
pub trait FromResponse: Sized {
    async fn from_response(response: Response) -> Result<Self>;
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status().as_u16();
    if !(200..=299).contains(&status) {
        let msg = response.text().await.unwrap_or_default();
        return Err(anyhow!("Request error (status: {}, body: {})", status, msg));
    }
    Ok(response)
}

impl FromResponse for String {
    async fn from_response(response: Response) -> Result<Self> {
        Ok(check_status(response).await?.text().await?)
    }
}

pub async fn get<T: FromResponse>(
    url: &str,
    headers: Option<Vec<(String, String)>>,
) -> Result<T> {
    let mut headers = convert_headers(headers)?.unwrap_or_default();
    if !headers.contains_key(USER_AGENT) {
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    }
    let response = reqwest::Client::new()
        .get(url)
        .headers(headers)
        .send()
        .await?;
    T::from_response(response).await
}

pub fn convert_headers(
    headers_option: Option<Vec<(String, String)>>,
) -> Result<Option<HeaderMap>> {
    headers_option
        .map(|headers_map| {
            let mut headers = HeaderMap::new();
            for (key, value) in headers_map {
                let header_name = HeaderName::from_bytes(key.as_bytes())
                    .map_err(|_| anyhow!("Invalid header name: {}", key))?;
                let header_value = HeaderValue::from_str(&value)
                    .map_err(|_| anyhow!("Invalid header value for {}", key))?;
                headers.insert(header_name, header_value);
            }
            Ok(headers)
        })
        .transpose()
}
