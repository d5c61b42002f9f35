use super::*;
use crate::gameroom::Command;
use crate::gameroom::ProtocolError;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc::unbounded_channel;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let casino = web::Data::new(Casino::default());
        let files = config.static_dir.clone();
        log::info!("starting hosting server on {}", config.bind);
        log::info!("serving client files from {}", files.display());
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(casino.clone())
                .configure(|cfg| routes(cfg, &files))
        })
        .workers(config.workers)
        .bind(&config.bind)?
        .run()
        .await
    }
}

/// Registers the socket and status routes, then the client files under `/`.
/// The file service must come last since it matches every path.
fn routes(cfg: &mut web::ServiceConfig, files: &Path) {
    cfg.route("/ws", web::get().to(enter))
        .route("/health", web::get().to(health))
        .route("/stats", web::get().to(stats))
        .service(actix_files::Files::new("/", files).index_file("index.html"));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn stats(casino: web::Data<Casino>) -> impl Responder {
    HttpResponse::Ok().json(casino.stats().await)
}

async fn enter(casino: web::Data<Casino>, body: web::Payload, req: HttpRequest) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            bridge(casino.into_inner(), session, stream);
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}

/// Spawns the per-connection task moving frames between the socket and the casino.
/// The loop ends when the client goes away or the registry drops the outbox.
fn bridge(casino: Arc<Casino>, mut session: actix_ws::Session, mut stream: actix_ws::MessageStream) {
    use futures::StreamExt;
    actix_web::rt::spawn(async move {
        let (tx, mut rx) = unbounded_channel::<String>();
        let id = casino.connect(tx).await;
        log::debug!("[bridge {}] connected", id);
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if session.text(json).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => casino.dispatch(id, &text).await,
                    Some(Ok(actix_ws::Message::Binary(_))) => casino.reject(id, ProtocolError::Unsupported).await,
                    Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        casino.command(id, Command::Leave).await;
        let _ = session.close(None).await;
        log::debug!("[bridge {}] disconnected", id);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn serves_client_files_beside_the_api() {
        let dir = std::env::temp_dir().join(format!("rochambeau-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>rochambeau</h1>").unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Casino::default()))
                .configure(|cfg| routes(cfg, &dir)),
        )
        .await;
        let index = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(index, "<h1>rochambeau</h1>");
        let health = test::call_and_read_body(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(health, "ok");
        let stats = test::call_service(&app, test::TestRequest::get().uri("/stats").to_request()).await;
        assert!(stats.status().is_success());
        let missing = test::call_service(&app, test::TestRequest::get().uri("/nope.js").to_request()).await;
        assert_eq!(missing.status(), actix_web::http::StatusCode::NOT_FOUND);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
