mod common;

use actix_ssl::common::enums::bind_error::BindError;
use actix_ssl::config::structs::ssl_config::SslConfig;
use actix_ssl::connector::connector::{ALPN_H2, ALPN_HTTP_1_1};
use actix_ssl::connector::enums::application_protocol::ApplicationProtocol;
use actix_ssl::connector::structs::connector_factory::ConnectorFactory;
use actix_ssl::connector::structs::listener_descriptor::ListenerDescriptor;
use actix_ssl::ssl::structs::security_context::SecurityContext;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App, HttpResponse};
use common::{client_config, default_client, handshake, secure_config, self_signed, TEST_HOST};
use std::sync::Arc;

fn secure_listener(config: &mut SslConfig) -> ListenerDescriptor {
    let context = Arc::new(SecurityContext::build(config).unwrap());
    ConnectorFactory::new(config, Some(context)).secure_listener().unwrap()
}

#[tokio::test]
async fn test_alpn_prefers_h2() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    let listener = secure_listener(&mut config);
    assert_eq!(listener.protocols, vec![ApplicationProtocol::H2, ApplicationProtocol::Http11]);
    assert!(listener.ensure_servable().is_ok());

    let client = client_config(&[&certificate], rustls::DEFAULT_VERSIONS, &[ALPN_H2, ALPN_HTTP_1_1]);
    let (_, stream) = handshake(Arc::new(listener.server_config().unwrap()), client, TEST_HOST).await;
    assert_eq!(stream.unwrap().get_ref().1.alpn_protocol(), Some(ALPN_H2));
}

#[tokio::test]
async fn test_alpn_without_http2() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.http2 = false;
    let listener = secure_listener(&mut config);
    assert_eq!(listener.alpn_protocols(), vec![ALPN_HTTP_1_1.to_vec()]);

    let client = client_config(&[&certificate], rustls::DEFAULT_VERSIONS, &[ALPN_H2, ALPN_HTTP_1_1]);
    let (_, stream) = handshake(Arc::new(listener.server_config().unwrap()), client, TEST_HOST).await;
    assert_eq!(stream.unwrap().get_ref().1.alpn_protocol(), Some(ALPN_HTTP_1_1));
    assert!(matches!(listener.ensure_servable(), Err(BindError::Http2Required { .. })));
}

#[tokio::test]
async fn test_hook_dropping_h2_is_not_servable() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.config_connectors(|listener| listener.protocols.retain(|protocol| *protocol != ApplicationProtocol::H2));
    let listener = secure_listener(&mut config);
    assert_eq!(listener.protocols, vec![ApplicationProtocol::Http11]);
    match listener.ensure_servable() {
        Err(BindError::Http2Required { name, protocols }) => {
            assert_eq!(name, "secure");
            assert_eq!(protocols, "http/1.1");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_sni_mismatch_fails_handshake() {
    let certificate = self_signed(&[TEST_HOST, "example.org"]);
    let mut config = secure_config(&certificate);
    let listener = secure_listener(&mut config);

    let (server, client) = handshake(listener.tls.clone().unwrap(), default_client(&certificate), "example.org").await;
    assert!(server.is_err());
    assert!(client.is_err());

    let (_, client) = handshake(listener.tls.clone().unwrap(), default_client(&certificate), "LOCALHOST").await;
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_sni_check_disabled() {
    let certificate = self_signed(&[TEST_HOST, "example.org"]);
    let mut config = secure_config(&certificate);
    config.sni_host_check = false;
    let listener = secure_listener(&mut config);

    let (_, client) = handshake(listener.tls.clone().unwrap(), default_client(&certificate), "example.org").await;
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_handshake_without_sni_passes() {
    let certificate = self_signed(&[TEST_HOST, "127.0.0.1"]);
    let mut config = secure_config(&certificate);
    let listener = secure_listener(&mut config);

    // IP server names are never sent as SNI.
    let (_, client) = handshake(listener.tls.clone().unwrap(), default_client(&certificate), "127.0.0.1").await;
    assert!(client.is_ok());
}

#[tokio::test]
async fn test_hook_reaches_secure_listener() {
    let certificate = self_signed(&[TEST_HOST]);
    let mut config = secure_config(&certificate);
    config.config_connectors(|listener| {
        if listener.is_secure() {
            listener.protocols.retain(|protocol| *protocol == ApplicationProtocol::Http11);
            listener.tcp_keepalive = Some(std::time::Duration::from_secs(30));
        }
    });
    let context = Arc::new(SecurityContext::build(&mut config).unwrap());
    let listeners = ConnectorFactory::new(&config, Some(context)).create_listeners().unwrap();
    assert_eq!(listeners.len(), 1);
    assert_eq!(listeners[0].protocols, vec![ApplicationProtocol::Http11]);
    assert_eq!(listeners[0].server_config().unwrap().alpn_protocols, vec![ALPN_HTTP_1_1.to_vec()]);
    assert!(listeners[0].open().is_ok());
}

#[actix_web::test]
async fn test_guard_redirects_insecure_requests() {
    let mut config = SslConfig::default();
    config.host = Some(String::from(TEST_HOST));
    config.secure_port = 8443;
    config.redirect = true;
    let guard = ConnectorFactory::new(&config, None).guard();

    let app = test::init_service(
        App::new()
            .wrap(guard)
            .route("/hello", web::get().to(|| async { HttpResponse::Ok().body("hello") })),
    )
    .await;

    let request = test::TestRequest::get()
        .uri("/hello?name=world")
        .insert_header((header::HOST, "localhost:8080"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://localhost:8443/hello?name=world"
    );
}

#[actix_web::test]
async fn test_guard_passes_without_redirect() {
    let mut config = SslConfig::default();
    config.host = Some(String::from("0.0.0.0"));
    let guard = ConnectorFactory::new(&config, None).guard();
    assert!(!guard.settings().is_active());

    let app = test::init_service(
        App::new()
            .wrap(guard)
            .route("/hello", web::get().to(|| async { HttpResponse::Ok().body("hello") })),
    )
    .await;
    let response = test::call_service(&app, test::TestRequest::get().uri("/hello").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(test::read_body(response).await, "hello");
}
