//! Loopback HTTP server standing in for third-party APIs in adapter tests.

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use reqwest::Url;

/// Running fake upstream. Stops when dropped.
pub struct FakeUpstream {
    base: Url,
    handle: ServerHandle,
}

impl FakeUpstream {
    /// Serve `configure`'s routes on an ephemeral loopback port.
    pub fn start<F>(configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let server = HttpServer::new(move || App::new().configure(configure.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind loopback port");
        let addr = *server.addrs().first().expect("bound address");
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base: Url::parse(&format!("http://{addr}/")).expect("loopback url"),
            handle,
        }
    }

    /// Base URL with a trailing slash.
    pub fn base(&self) -> Url {
        self.base.clone()
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        drop(self.handle.stop(false));
    }
}
