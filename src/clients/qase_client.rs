/// Qase API 客户端
///
/// 封装创建运行、批量提交结果、结束运行三个调用
use crate::clients::test_ops::{ResultSubmission, TestOpsApi};
use crate::config::Config;
use crate::error::ApiError;
use crate::models::CaseId;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Serialize)]
struct RunCreateRequest<'a> {
    title: &'a str,
    cases: &'a [CaseId],
}

#[derive(Serialize)]
struct ResultBulkRequest<'a> {
    results: &'a [ResultSubmission],
}

/// Qase 统一响应格式
#[derive(Deserialize)]
struct QaseResponse<T> {
    status: bool,
    result: Option<T>,
}

#[derive(Deserialize)]
struct RunCreated {
    id: u64,
}

/// Qase API 客户端
pub struct QaseClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
    project: String,
}

impl QaseClient {
    /// 创建新的 Qase 客户端
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// 使用外部构建的 reqwest 客户端
    pub fn with_http_client(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
            project: config.project.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// 发送 POST 请求并检查 HTTP 状态码与响应中的 status 字段
    async fn post<B, R>(&self, endpoint: &str, body: Option<&B>) -> Result<Option<R>, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let mut request = self.http_client.post(&url).header("Token", &self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::BadStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: QaseResponse<R> = response
            .json()
            .await
            .map_err(|e| ApiError::json_parse_failed(endpoint, e))?;

        if !parsed.status {
            return Err(ApiError::Unsuccessful {
                endpoint: endpoint.to_string(),
            });
        }

        Ok(parsed.result)
    }
}

#[async_trait]
impl TestOpsApi for QaseClient {
    async fn create_run(&self, title: &str, case_ids: &[CaseId]) -> Result<u64, ApiError> {
        let endpoint = format!("run/{}", self.project);
        let body = RunCreateRequest {
            title,
            cases: case_ids,
        };

        let created: Option<RunCreated> = self.post(&endpoint, Some(&body)).await?;
        let run_id = created
            .map(|r| r.id)
            .ok_or(ApiError::Unsuccessful { endpoint })?;

        info!("✓ 测试运行已创建: #{} ({} 个用例)", run_id, case_ids.len());
        Ok(run_id)
    }

    async fn submit_results_bulk(
        &self,
        run_id: u64,
        results: &[ResultSubmission],
    ) -> Result<(), ApiError> {
        let endpoint = format!("result/{}/{}/bulk", self.project, run_id);
        let body = ResultBulkRequest { results };

        let _: Option<Value> = self.post(&endpoint, Some(&body)).await?;

        info!("✓ 已提交 {} 条结果", results.len());
        Ok(())
    }

    async fn complete_run(&self, run_id: u64) -> Result<(), ApiError> {
        let endpoint = format!("run/{}/{}/complete", self.project, run_id);

        let _: Option<Value> = self.post::<(), _>(&endpoint, None).await?;

        info!("✓ 测试运行 #{} 已结束", run_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultStatus;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// 启动只响应一次的 HTTP 服务，返回 base url 和收到的原始请求
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&buf).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    fn client(base_url: String) -> QaseClient {
        let config = Config {
            project: "DEMO".to_string(),
            api_token: "secret-token".to_string(),
            api_base_url: format!("{}/", base_url),
            ..Config::default()
        };
        // 本地测试服务不走系统代理
        let http_client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        QaseClient::with_http_client(&config, http_client)
    }

    #[test]
    fn test_new_trims_base_url() {
        let client = QaseClient::new(&Config {
            api_base_url: "https://api.qase.io/v1/".to_string(),
            project: "DEMO".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert_eq!(client.url("run/DEMO"), "https://api.qase.io/v1/run/DEMO");
    }

    #[tokio::test]
    async fn test_create_run() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"status":true,"result":{"id":77}}"#).await;

        let run_id = client(base_url).create_run("nightly", &[3, 1, 3]).await.unwrap();
        assert_eq!(run_id, 77);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /run/DEMO HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("token: secret-token"));
        assert!(request.contains(r#"{"title":"nightly","cases":[3,1,3]}"#));
    }

    #[tokio::test]
    async fn test_submit_results_bulk() {
        let (base_url, server) = serve_once("200 OK", r#"{"status":true}"#).await;

        let results = vec![ResultSubmission {
            case_id: 5,
            status: ResultStatus::Passed,
            time_ms: 10000,
            comment: Some("Package: github.com/test".to_string()),
        }];
        client(base_url).submit_results_bulk(77, &results).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /result/DEMO/77/bulk HTTP/1.1"));
        assert!(request.contains(
            r#"{"results":[{"case_id":5,"status":"passed","time_ms":10000,"comment":"Package: github.com/test"}]}"#
        ));
    }

    #[tokio::test]
    async fn test_complete_run_status_false() {
        let (base_url, server) = serve_once("200 OK", r#"{"status":false}"#).await;

        let err = client(base_url).complete_run(77).await.unwrap_err();
        assert!(matches!(err, ApiError::Unsuccessful { ref endpoint } if endpoint == "run/DEMO/77/complete"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /run/DEMO/77/complete HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_bad_status_keeps_body() {
        let (base_url, server) = serve_once(
            "400 Bad Request",
            r#"{"status":false,"errorMessage":"Data is invalid."}"#,
        )
        .await;

        let err = client(base_url).create_run("nightly", &[1]).await.unwrap_err();
        match err {
            ApiError::BadStatus { status, body, .. } => {
                assert_eq!(status, 400);
                assert!(body.contains("Data is invalid."));
            }
            other => panic!("意外的错误: {}", other),
        }
        server.await.unwrap();
    }

    #[test]
    fn test_create_run_without_result() {
        let parsed: QaseResponse<RunCreated> = serde_json::from_str(r#"{"status":true}"#).unwrap();
        assert!(parsed.status);
        assert!(parsed.result.is_none());
    }
}
