// This file is part of the terraform-provider-okta project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::config::ClientConfig;
use super::{Brand, BrandApi, BrandRequest};

const BRANDS_PATH: &str = "/api/v1/brands";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    error_code: String,
    #[serde(default)]
    error_summary: String,
}

/// Okta REST client
#[derive(Debug, Clone)]
pub struct OktaClient {
    client: Client,
    config: ClientConfig,
}

impl OktaClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("SSWS {}", self.config.api_token))
            .header(ACCEPT, "application/json")
    }

    fn brands_url(&self) -> Result<Url> {
        let url = format!("{}{}", self.config.org_url, BRANDS_PATH);
        Url::parse(&url).with_context(|| format!("Invalid Okta URL: {url}"))
    }

    /// `brand_id` is pushed as a single encoded path segment
    fn brand_url(&self, brand_id: &str) -> Result<Url> {
        let mut url = self.brands_url()?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid Okta URL: {}", self.config.org_url))?
            .push(brand_id);
        Ok(url)
    }

    /// Pages must stay on the organization origin, the token is sent along
    fn check_next(&self, current: &Url, next: &str) -> Result<Option<Url>> {
        let next = Url::parse(next).with_context(|| format!("Invalid next page link: {next}"))?;
        if next.origin() != current.origin() {
            return Err(anyhow!(
                "Refusing to follow next page link outside of {}: {next}",
                self.config.org_url
            ));
        }
        if &next == current {
            tracing::warn!("next page link repeats {}, stopping", current);
            return Ok(None);
        }
        Ok(Some(next))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        tracing::error!("Okta API error: {} ({})", status, error.error_code);
        if error.error_summary.is_empty() {
            Err(anyhow!("Okta API request failed: {status}"))
        } else {
            Err(anyhow!(
                "Okta API request failed: {status}: {}",
                error.error_summary
            ))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        response
            .json()
            .await
            .context("Failed to parse response JSON")
            .map(Some)
    }
}

/// Extract the `rel="next"` target of a `Link` header
fn next_link(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(|link| {
            let (target, params) = link.split_once(';')?;
            params
                .split(';')
                .any(|param| param.trim().replace(' ', "") == "rel=\"next\"")
                .then(|| {
                    target
                        .trim()
                        .trim_start_matches('<')
                        .trim_end_matches('>')
                        .to_owned()
                })
        })
}

#[async_trait]
impl BrandApi for OktaClient {
    async fn list_brands(&self) -> Result<Vec<Brand>> {
        let mut brands = Vec::new();
        let mut url = Some(self.brands_url()?);

        while let Some(current) = url.take() {
            tracing::debug!("GET {}", current);
            let response = self.send(self.client.get(current.clone())).await?;
            url = match next_link(&response) {
                Some(next) => self.check_next(&current, &next)?,
                None => None,
            };
            let page: Vec<Brand> = Self::decode(response)
                .await?
                .ok_or_else(|| anyhow!("Brands endpoint not found: {current}"))?;
            brands.extend(page);
        }

        Ok(brands)
    }

    async fn get_brand(&self, brand_id: &str) -> Result<Option<Brand>> {
        let url = self.brand_url(brand_id)?;
        tracing::debug!("GET {}", url);
        Self::decode(self.send(self.client.get(url)).await?).await
    }

    async fn update_brand(&self, brand_id: &str, request: &BrandRequest) -> Result<Brand> {
        let url = self.brand_url(brand_id)?;
        tracing::debug!("PUT {}", url);
        Self::decode(self.send(self.client.put(url).json(request)).await?)
            .await?
            .ok_or_else(|| anyhow!("Brand `{brand_id}` does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::okta::OptionalFlag;

    use super::*;

    fn client(server: &MockServer) -> OktaClient {
        OktaClient::new(ClientConfig::with_endpoint(server.uri(), "test-token")).unwrap()
    }

    #[tokio::test]
    async fn get_brand_sends_ssws_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/brands/bnd1"))
            .and(header("authorization", "SSWS test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "bnd1",
                "customPrivacyPolicyUrl": "https://example.com/policy",
                "removePoweredByOkta": true,
                "_links": {"themes": {"href": "https://acme.okta.com/api/v1/brands/bnd1/themes"}},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let brand = client(&server).get_brand("bnd1").await.unwrap().unwrap();
        assert_eq!(brand.id, "bnd1");
        assert_eq!(brand.custom_privacy_policy_url, "https://example.com/policy");
        assert_eq!(brand.remove_powered_by_okta, OptionalFlag::Present(true));
    }

    #[tokio::test]
    async fn get_missing_brand() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/brands/unknown"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errorCode": "E0000007",
                "errorSummary": "Not found: Resource not found: unknown (Brand)",
            })))
            .mount(&server)
            .await;

        assert!(client(&server).get_brand("unknown").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn error_summary_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/brands/bnd1"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errorCode": "E0000001",
                "errorSummary": "Api validation failed: agreeToCustomPrivacyPolicy",
            })))
            .mount(&server)
            .await;

        let request = BrandRequest {
            custom_privacy_policy_url: "https://example.com/policy".to_owned(),
            ..Default::default()
        };
        let err = client(&server)
            .update_brand("bnd1", &request)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("400"), "{message}");
        assert!(message.contains("agreeToCustomPrivacyPolicy"), "{message}");
    }

    #[tokio::test]
    async fn update_sends_request_body() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/brands/bnd1"))
            .and(body_json(json!({
                "agreeToCustomPrivacyPolicy": true,
                "customPrivacyPolicyUrl": "https://example.com/policy",
                "removePoweredByOkta": true,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "bnd1",
                "customPrivacyPolicyUrl": "https://example.com/policy",
                "removePoweredByOkta": true,
                "_links": {},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = BrandRequest {
            agree_to_custom_privacy_policy: Some(true),
            custom_privacy_policy_url: "https://example.com/policy".to_owned(),
            remove_powered_by_okta: true,
        };
        let brand = client(&server).update_brand("bnd1", &request).await.unwrap();
        assert_eq!(brand.remove_powered_by_okta, OptionalFlag::Present(true));
    }

    #[tokio::test]
    async fn list_brands_follows_pages() {
        let server = MockServer::start().await;
        let next = format!("{}/api/v1/brands/page2", server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v1/brands"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("link", format!("<{next}>; rel=\"next\"").as_str())
                    .set_body_json(json!([{"id": "bnd1"}])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/brands/page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "bnd2"}])))
            .expect(1)
            .mount(&server)
            .await;

        let brands = client(&server).list_brands().await.unwrap();
        let ids: Vec<_> = brands.iter().map(|brand| brand.id.as_str()).collect();
        assert_eq!(ids, ["bnd1", "bnd2"]);
    }

    #[tokio::test]
    async fn brand_id_is_a_single_segment() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/brands/bnd1%2Fthemes%3Fx"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "bnd1"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/brands/bnd1/themes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let brand = client(&server).get_brand("bnd1/themes?x").await.unwrap();
        assert!(brand.is_some());
    }

    #[tokio::test]
    async fn list_brands_stops_on_repeated_page() {
        let server = MockServer::start().await;
        let current = format!("{}/api/v1/brands", server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v1/brands"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("link", format!("<{current}>; rel=\"next\"").as_str())
                    .set_body_json(json!([{"id": "bnd1"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let brands = client(&server).list_brands().await.unwrap();
        assert_eq!(brands.len(), 1);
    }

    #[tokio::test]
    async fn list_brands_stays_on_origin() {
        let server = MockServer::start().await;
        let other = MockServer::start().await;
        let next = format!("{}/api/v1/brands?after=bnd1", other.uri());

        Mock::given(method("GET"))
            .and(path("/api/v1/brands"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("link", format!("<{next}>; rel=\"next\"").as_str())
                    .set_body_json(json!([{"id": "bnd1"}])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&other)
            .await;

        let err = client(&server).list_brands().await.unwrap_err();
        assert!(err.to_string().contains("Refusing"), "{err}");
    }
}
