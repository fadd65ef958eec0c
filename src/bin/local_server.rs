use eco_route::data_types::common::CompareRequest;
use eco_route::errors::CompareError;
use eco_route::App;
use rocket::http::{ContentType, Status};

#[macro_use]
extern crate rocket;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::{Request, Response};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Cross-Origin-Resource-Sharing Fairing",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, PATCH, PUT, DELETE, HEAD, OPTIONS, GET",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[options("/<_..>")]
fn all_options() {
    /* Intentionally left empty */
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn error_response(err: &CompareError) -> (Status, (ContentType, String)) {
    let status = Status::from_code(err.http_status()).unwrap_or(Status::InternalServerError);

    (status, (ContentType::JSON, error_body(&err.to_string())))
}

#[post("/api/route", data = "<body>")]
async fn compare_route(body: String) -> (Status, (ContentType, String)) {
    let request: CompareRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            return (
                Status::BadRequest,
                (ContentType::JSON, error_body(&format!("invalid request: {}", err))),
            )
        }
    };

    let app = App::new();
    match app.compare_routes(request).await {
        Ok(outcome) => (
            Status::Ok,
            (ContentType::JSON, serde_json::to_string(&outcome).unwrap()),
        ),
        Err(err) => error_response(&err),
    }
}

#[get("/health")]
fn health() -> (Status, (ContentType, String)) {
    let body = serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (Status::Ok, (ContentType::JSON, body.to_string()))
}

#[launch]
fn rocket() -> _ {
    rocket::build()
        .attach(Cors)
        .mount("/", routes![compare_route, health, all_options])
}
