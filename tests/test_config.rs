use std::io::Write;

use ember::config::Config;

#[test]
fn test_from_env_defaults_and_overrides() {
    // Env mutation is process-global, so defaults and overrides are checked
    // in one sequential test.
    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("FILES_ROOT");
        std::env::remove_var("MAX_CONNECTIONS");
    }
    let cfg = Config::from_env();
    assert_eq!(cfg.listen_addr, "127.0.0.1:4221");
    assert_eq!(cfg.files_root, "/tmp/");
    assert_eq!(cfg.max_connections, 10);

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("FILES_ROOT", "/srv/blobs");
        std::env::set_var("MAX_CONNECTIONS", "32");
    }
    let cfg = Config::from_env();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.files_root, "/srv/blobs");
    assert_eq!(cfg.max_connections, 32);

    unsafe {
        std::env::set_var("MAX_CONNECTIONS", "not-a-number");
    }
    let cfg = Config::from_env();
    assert_eq!(cfg.max_connections, 10);

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("FILES_ROOT");
        std::env::remove_var("MAX_CONNECTIONS");
    }
}

#[test]
fn test_from_file_yaml() {
    let path = std::env::temp_dir().join(format!("ember-config-{}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "listen_addr: 127.0.0.1:9999").unwrap();
    writeln!(file, "files_root: /var/data/").unwrap();
    writeln!(file, "max_connections: 4").unwrap();

    let cfg = Config::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:9999");
    assert_eq!(cfg.files_root, "/var/data/");
    assert_eq!(cfg.max_connections, 4);
}

#[test]
fn test_from_file_missing_keys_use_defaults() {
    let path = std::env::temp_dir().join(format!("ember-config-partial-{}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "listen_addr: 127.0.0.1:8888").unwrap();

    let cfg = Config::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8888");
    assert_eq!(cfg.files_root, "/tmp/");
    assert_eq!(cfg.max_connections, 10);
}

#[test]
fn test_from_file_unreadable_path_is_an_error() {
    assert!(Config::from_file("/no/such/config.yaml").is_err());
}

#[test]
fn test_config_clone() {
    let cfg = Config {
        listen_addr: "127.0.0.1:4221".to_string(),
        files_root: "/tmp/".to_string(),
        max_connections: 10,
    };
    let copy = cfg.clone();
    assert_eq!(cfg.listen_addr, copy.listen_addr);
    assert_eq!(cfg.files_root, copy.files_root);
    assert_eq!(cfg.max_connections, copy.max_connections);
}
