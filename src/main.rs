use std::sync::{Arc, Mutex};

use textpack::interfaces::http::{add_log, start_server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let logs = Arc::new(Mutex::new(Vec::new()));
    let server = start_server(logs.clone())?;
    add_log(&logs, "INFO", "System", "HTTP server listening on 127.0.0.1:3001");
    server.await
}
