use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

fn configured() -> SocketAddr {
    "192.168.1.5:4000".parse().unwrap()
}

#[test]
fn unset_leaves_configured_site_addr_alone() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.site_addr(configured()), configured());
}

#[test]
fn parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 "), ("SITE_ROOT", "dist/site")]))
        .unwrap();
    assert_eq!(cfg.site_addr(configured()).to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("dist/site")));
}

#[test]
fn port_alone_keeps_configured_ip() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(cfg.site_addr(configured()).to_string(), "192.168.1.5:8080");
}

#[test]
fn host_alone_keeps_configured_port() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.site_addr(configured()).to_string(), "127.0.0.1:4000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", ""), ("PORT", "  "), ("SITE_ROOT", " ")])).unwrap();
    assert_eq!(cfg.site_addr(configured()), configured());
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn invalid_host_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("HOST", "localhost:80")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}
