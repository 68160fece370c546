use std::io::Read;
use std::time::Duration;

use photoclip_application::{AlbumApi, ApplicationError, ThumbnailFetcher, ThumbnailImage};
use photoclip_domain::{album_url, Album, Settings};

// Thumbnails come back as small JPEGs; anything past this is not one.
const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_ALBUM_BYTES: u64 = 64 * 1024 * 1024;

/// Blocking HTTP client for the album service. Implements both read
/// ports: the album listing (JSON) and thumbnail bytes (decoded into an
/// 0xRRGGBB pixel buffer for the UI to blit).
pub struct UreqAlbumClient {
    agent: ureq::Agent,
}

impl UreqAlbumClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .build(),
        }
    }
}

impl Default for UreqAlbumClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AlbumApi for UreqAlbumClient {
    fn fetch_album(&self, settings: &Settings) -> Result<Album, ApplicationError> {
        let url = album_url(&settings.service_url, &settings.album_id);
        log::debug!("fetching album listing from {url}");

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .set("x-api-key", &settings.api_key)
            .call()
            .map_err(map_ureq_error)?;

        let reader = response.into_reader().take(MAX_ALBUM_BYTES);
        serde_json::from_reader(reader)
            .map_err(|error| ApplicationError::Decode(format!("album body: {error}")))
    }
}

impl ThumbnailFetcher for UreqAlbumClient {
    fn fetch_thumbnail(&self, url: &str) -> Result<ThumbnailImage, ApplicationError> {
        let response = self.agent.get(url).call().map_err(map_ureq_error)?;

        let content_type = response.content_type().to_ascii_lowercase();
        if !content_type.starts_with("image/") {
            return Err(ApplicationError::Decode(format!(
                "expected an image, got content type '{content_type}'"
            )));
        }

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_IMAGE_BYTES)
            .read_to_end(&mut bytes)
            .map_err(|error| ApplicationError::Io(error.to_string()))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;
        Ok(pack_pixels(&decoded))
    }
}

fn map_ureq_error(error: ureq::Error) -> ApplicationError {
    match error {
        ureq::Error::Status(code, response) => {
            ApplicationError::Http(format!("status {code} from {}", response.get_url()))
        }
        ureq::Error::Transport(transport) => ApplicationError::Http(transport.to_string()),
    }
}

fn pack_pixels(decoded: &image::DynamicImage) -> ThumbnailImage {
    let source = decoded.to_rgb8();
    let pixels = source
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
        })
        .collect();

    ThumbnailImage {
        width: source.width(),
        height: source.height(),
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    use super::*;

    /// One-shot HTTP stub on a loopback port. Sends back a canned
    /// response and hands the raw request text to the test.
    fn spawn_stub(
        status_line: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let (request_tx, request_rx) = mpsc::channel();
        let status_line = status_line.to_string();
        let content_type = content_type.to_string();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut request = Vec::new();
            let mut chunk = [0_u8; 1024];
            loop {
                let read = Read::read(&mut stream, &mut chunk).expect("read request");
                request.extend_from_slice(&chunk[..read]);
                if read == 0 || request.windows(4).any(|window| window == b"\r\n\r\n") {
                    break;
                }
            }
            request_tx
                .send(String::from_utf8_lossy(&request).to_string())
                .ok();

            let header = format!(
                "{status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(header.as_bytes()).expect("write header");
            stream.write_all(&body).expect("write body");
        });

        (format!("http://{addr}"), request_rx)
    }

    fn settings_for(service_url: &str) -> Settings {
        Settings {
            service_url: service_url.to_string(),
            api_key: "secret-key".to_string(),
            album_id: "alb-1".to_string(),
            album_share_key: "share".to_string(),
        }
    }

    #[test]
    fn fetch_album_sends_headers_and_parses_body() {
        let body = br#"{"albumName": "notes", "assets": [{"id": "a1"}]}"#.to_vec();
        let (base, requests) = spawn_stub("HTTP/1.1 200 OK", "application/json", body);

        let client = UreqAlbumClient::new();
        let album = client
            .fetch_album(&settings_for(&base))
            .expect("album should parse");

        assert_eq!(album.album_name, "notes");
        assert_eq!(album.asset_count(), 1);

        let request = requests.recv().expect("captured request");
        assert!(request.starts_with("GET /api/albums/alb-1 "));
        assert!(request.to_ascii_lowercase().contains("x-api-key: secret-key"));
        assert!(request.to_ascii_lowercase().contains("accept: application/json"));
    }

    #[test]
    fn non_2xx_status_maps_to_http_error() {
        let (base, _requests) =
            spawn_stub("HTTP/1.1 401 Unauthorized", "application/json", b"{}".to_vec());

        let client = UreqAlbumClient::new();
        let result = client.fetch_album(&settings_for(&base));
        match result {
            Err(ApplicationError::Http(msg)) => assert!(msg.contains("401")),
            other => panic!("expected http error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_thumbnail_decodes_image_bytes() {
        let source = image::RgbImage::from_pixel(4, 2, image::Rgb([0x10, 0x20, 0x30]));
        let mut encoded = Vec::new();
        image::DynamicImage::ImageRgb8(source)
            .write_to(&mut Cursor::new(&mut encoded), image::ImageOutputFormat::Png)
            .expect("encode png");
        let (base, _requests) = spawn_stub("HTTP/1.1 200 OK", "image/png", encoded);

        let client = UreqAlbumClient::new();
        let thumbnail = client
            .fetch_thumbnail(&format!("{base}/api/assets/a1/thumbnail?size=thumbnail&key=s"))
            .expect("thumbnail should decode");

        assert_eq!(thumbnail.width, 4);
        assert_eq!(thumbnail.height, 2);
        assert_eq!(thumbnail.pixels[0], 0x102030);
    }

    #[test]
    fn non_image_content_type_is_rejected() {
        let (base, _requests) =
            spawn_stub("HTTP/1.1 200 OK", "text/html", b"<html></html>".to_vec());

        let client = UreqAlbumClient::new();
        let result = client.fetch_thumbnail(&format!("{base}/thumb"));
        assert!(matches!(result, Err(ApplicationError::Decode(_))));
    }
}
