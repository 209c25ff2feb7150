use glosa_config::translator::TranslatorConfig;
use glosa_translator::{TranslateError, Translator};

use super::server::{TestServer, client, closed_port_url};
use crate::WordReferenceTranslator;

fn translator(base_url: &str) -> WordReferenceTranslator {
    let config = TranslatorConfig {
        base_url: base_url.into(),
        dictionary: "ensv".into(),
    };
    WordReferenceTranslator::new(&config, client())
}

#[tokio::test]
async fn test_translations_from_page() {
    let page = r#"<html><body><table class="WRD">
        <tr><td class="ToWrd">leda <em>vtr</em></td></tr>
        <tr><td class="ToWrd">sköta <em>vtr</em></td></tr>
    </table></body></html>"#;
    let server = TestServer::start("200 OK", page).await;

    let translations = translator(&server.base_url).translate("ice cream").await.unwrap();
    assert_eq!(translations, vec!["leda", "sköta"]);
    assert_eq!(server.paths(), vec!["/ensv/ice%20cream".to_string()]);
}

#[tokio::test]
async fn test_not_found_page_is_empty_not_error() {
    let page = "<html><body><p>No translation found for 'manage'.</p></body></html>";
    let server = TestServer::start("404 Not Found", page).await;

    let translations = translator(&server.base_url).translate("manage").await.unwrap();
    assert!(translations.is_empty());
}

#[tokio::test]
async fn test_error_page_with_table_still_scraped() {
    let page = r#"<table class="WRD"><tr><td class="ToWrd">leda</td></tr></table>"#;
    let server = TestServer::start("500 Internal Server Error", page).await;

    let translations = translator(&server.base_url).translate("manage").await.unwrap();
    assert_eq!(translations, vec!["leda"]);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let err = translator(&closed_port_url().await)
        .translate("manage")
        .await
        .unwrap_err();
    assert!(matches!(err, TranslateError::NetworkError(_)), "{err}");
}
