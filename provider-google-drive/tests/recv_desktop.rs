//! End-to-end receive through the HTTP connector into real files

use async_trait::async_trait;
use bridge_desktop::TokioFileSystem;
use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse, HttpStreamResponse};
use bytes::Bytes;
use core_runtime::config::CoreConfig;
use futures::{stream, StreamExt};
use provider_google_drive::{DownloadRequest, DriveReceiver, GoogleDriveError, ReceiveRequest};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const API_BASE: &str = "http://drive.test/v3";

/// Serves a single folder: "report" (a native doc) and "photo.jpg" (binary)
#[derive(Default)]
struct FakeDriveServer {
    urls: Mutex<Vec<String>>,
}

impl FakeDriveServer {
    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    fn body_stream(chunks: &[&'static [u8]]) -> bridge_traits::ByteStream {
        let items: Vec<BridgeResult<Bytes>> =
            chunks.iter().map(|c| Ok(Bytes::from_static(c))).collect();
        stream::iter(items).boxed()
    }
}

#[async_trait]
impl HttpClient for FakeDriveServer {
    async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse> {
        self.urls.lock().unwrap().push(request.url.clone());

        let body: &'static [u8] = if request.url.contains("name%20%3D%20%27report%27") {
            br#"{"files":[{"id":"report-id","name":"report"}]}"#
        } else {
            br#"{"files":[]}"#
        };

        Ok(HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from_static(body),
        })
    }

    async fn execute_stream(&self, request: HttpRequest) -> BridgeResult<HttpStreamResponse> {
        self.urls.lock().unwrap().push(request.url.clone());

        let (status, body) = if request.url.ends_with("/files/report-id/export?mimeType=text%2Fcsv") {
            (200, Self::body_stream(&[b"a,b\n", b"1,2\n"]))
        } else if request.url.ends_with("/files/photo-id?alt=media") {
            (200, Self::body_stream(&[&[0xff, 0xd8], &[0xff, 0xd9]]))
        } else if request.url.contains("/files/broken-id") {
            let items: Vec<BridgeResult<Bytes>> = vec![
                Ok(Bytes::from_static(b"partial")),
                Err(BridgeError::OperationFailed("connection reset".to_string())),
            ];
            (200, stream::iter(items).boxed())
        } else {
            (
                404,
                Self::body_stream(&[br#"{"error":{"code":404,"message":"File not found."}}"#]),
            )
        };

        Ok(HttpStreamResponse {
            status,
            headers: HashMap::new(),
            body,
        })
    }
}

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("drive-recv-it-{}", uuid::Uuid::new_v4()))
}

fn receiver(server: Arc<FakeDriveServer>, root: PathBuf) -> DriveReceiver {
    let config = CoreConfig::builder()
        .http_client(server)
        .file_system(Arc::new(TokioFileSystem::with_root(root)))
        .drive_api_base(API_BASE)
        .build()
        .unwrap();

    DriveReceiver::from_config(&config, "token")
}

#[tokio::test]
async fn test_recv_by_name_exports_to_disk() {
    let dir = scratch_dir();
    let server = Arc::new(FakeDriveServer::default());
    let receiver = receiver(server.clone(), dir.clone());

    let id = receiver
        .recv(&ReceiveRequest {
            parent_id: "folder".to_string(),
            src_file_name: "report".to_string(),
            dest_file_name: PathBuf::from("out/report.csv"),
            dest_mime_type: "text/csv".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(id, "report-id");
    let contents = tokio::fs::read_to_string(dir.join("out/report.csv"))
        .await
        .unwrap();
    assert_eq!(contents, "a,b\n1,2\n");
    assert_eq!(server.urls().len(), 2);

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_download_media_by_id() {
    let dir = scratch_dir();
    let server = Arc::new(FakeDriveServer::default());
    let receiver = receiver(server.clone(), dir.clone());

    receiver
        .download(&DownloadRequest {
            file_id: "photo-id".to_string(),
            dest_file_name: PathBuf::from("photo.jpg"),
            dest_mime_type: String::new(),
        })
        .await
        .unwrap();

    let contents = tokio::fs::read(dir.join("photo.jpg")).await.unwrap();
    assert_eq!(contents, vec![0xff, 0xd8, 0xff, 0xd9]);
    assert_eq!(
        server.urls(),
        vec![format!("{}/files/photo-id?alt=media", API_BASE)]
    );

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_missing_file_reports_not_found_without_creating_destination() {
    let dir = scratch_dir();
    let server = Arc::new(FakeDriveServer::default());
    let receiver = receiver(server, dir.clone());

    let error = receiver
        .recv(&ReceiveRequest {
            parent_id: "folder".to_string(),
            src_file_name: "absent".to_string(),
            dest_file_name: PathBuf::from("absent.bin"),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(error.is_file_not_found());
    assert!(!dir.join("absent.bin").exists());
}

#[tokio::test]
async fn test_api_error_surfaces_as_download_error() {
    let dir = scratch_dir();
    let receiver = receiver(Arc::new(FakeDriveServer::default()), dir.clone());

    let error = receiver
        .download(&DownloadRequest {
            file_id: "unknown-id".to_string(),
            dest_file_name: PathBuf::from("unknown.bin"),
            dest_mime_type: String::new(),
        })
        .await
        .unwrap_err();

    match &error {
        GoogleDriveError::DownloadFile(inner) => {
            assert!(matches!(
                inner.inner(),
                GoogleDriveError::ApiError {
                    status_code: 404,
                    ..
                }
            ));
        }
        other => panic!("expected DownloadFile, got {:?}", other),
    }
    assert_eq!(
        error.to_string(),
        "Google Drive API error (status 404): File not found."
    );

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_interrupted_stream_leaves_closed_partial_file() {
    let dir = scratch_dir();
    let receiver = receiver(Arc::new(FakeDriveServer::default()), dir.clone());

    let error = receiver
        .download(&DownloadRequest {
            file_id: "broken-id".to_string(),
            dest_file_name: PathBuf::from("broken.bin"),
            dest_mime_type: String::new(),
        })
        .await
        .unwrap_err();

    assert!(error.is_download_error());
    assert_eq!(error.to_string(), "Bridge operation failed: connection reset");
    let contents = tokio::fs::read(dir.join("broken.bin")).await.unwrap();
    assert_eq!(contents, b"partial".to_vec());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
