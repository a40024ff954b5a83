use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use rocket::http::{Header, Method};
use crate::config::AppConfig;

const ALLOWED_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// Grants cross-origin access, with credentials, to the single configured
/// origin. Other origins get no CORS headers at all.
pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let Some(origin) = req.headers().get_one("Origin") else {
            return;
        };
        let allowed = req.rocket()
            .state::<AppConfig>()
            .map_or(false, |config| config.cors_origin == origin);

        if !allowed {
            return;
        }

        res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
        res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        res.set_header(Header::new("Vary", "Origin"));

        if req.method() == Method::Options {
            res.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
            if let Some(headers) = req.headers().get_one("Access-Control-Request-Headers") {
                res.set_header(Header::new("Access-Control-Allow-Headers", headers.to_string()));
            }
            res.set_header(Header::new("Access-Control-Max-Age", "600"));
        }
    }
}
