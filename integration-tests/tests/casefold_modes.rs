use casefold_core::{CasefoldConfig, Mode};
use integration_tests::harness::{FixtureTree, TestServer};
use pretty_assertions::assert_eq;

#[test]
fn lower_mode_rewrites_and_echoes_original() {
    // Arrange
    let server = TestServer::new(&CasefoldConfig::new(Mode::Lower));

    // Act
    let exchange = server.get("http://example.test/HeLLo/World");

    // Assert
    assert_eq!(exchange.final_path(), "/hello/world");
    assert_eq!(exchange.response_header("x-original-uri"), Some("/HeLLo/World"));
    assert_eq!(exchange.request_header("x-original-uri"), Some("/HeLLo/World"));
}

#[test]
fn excluded_path_keeps_its_casing() {
    let server = TestServer::new(&CasefoldConfig::new(Mode::Lower).with_exclude(["/API/*"]));

    let exchange = server.get("http://example.test/API/MixedCase");

    assert_eq!(exchange.final_path(), "/API/MixedCase");
    assert_eq!(exchange.response_header("x-original-uri"), None);
}

#[test]
fn fold_mode_expands_sharp_s() {
    let server = TestServer::new(&CasefoldConfig::new(Mode::Fold));

    let exchange = server.get("http://example.test/stra%C3%9Fe");

    assert_eq!(exchange.final_path(), "/strasse");
    assert!(exchange.response.headers.contains_key("x-original-uri"));
}

#[test]
fn fs_mode_recovers_on_disk_casing() {
    // Arrange
    let tree = FixtureTree::with_files(&["scripts/MyScript.bat"]);
    let server = TestServer::new(
        &CasefoldConfig::new(Mode::FilesystemCanonical).with_root(tree.root()),
    );

    // Act
    let exchange = server.get("http://example.test/scripts/myscript.bat");

    // Assert
    assert_eq!(exchange.final_path(), "/scripts/MyScript.bat");
    assert_eq!(
        exchange.response_header("x-original-uri"),
        Some("/scripts/myscript.bat")
    );
}

#[test]
fn root_request_is_never_rewritten() {
    for mode in [Mode::Lower, Mode::Fold, Mode::FilesystemCanonical] {
        let server = TestServer::new(&CasefoldConfig::new(mode));

        let exchange = server.get("/");

        assert_eq!(exchange.final_path(), "/");
        assert_eq!(exchange.response_header("x-original-uri"), None);
    }
}

#[test]
fn disabled_device_is_not_installed() {
    let mut cfg = CasefoldConfig::new(Mode::Lower);
    cfg.enable = false;
    let server = TestServer::new(&cfg);

    let exchange = server.get("/HeLLo");

    assert_eq!(exchange.final_path(), "/HeLLo");
}

#[test]
fn query_survives_rewrite() {
    let server = TestServer::new(&CasefoldConfig::new(Mode::Lower));

    let exchange = server.get("/Docs/Index.HTML?Lang=EN");

    assert_eq!(exchange.final_path(), "/docs/index.html");
    assert_eq!(exchange.request.request_uri(), "/docs/index.html?Lang=EN");
}
