//! Shared test utilities for push settings tests

#![allow(dead_code)]

use push_settings::config::ServerConfig;
use push_settings::PushContents;

/// Builds a config with the three push fields set
pub fn push_config(send: bool, server: &str, contents: PushContents) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.email_settings.send_push_notifications = send;
    config.email_settings.push_notification_server = server.to_string();
    config.email_settings.push_notification_contents = contents.into();
    config
}

/// A full server config as written by the server, with unrelated sections
pub const FULL_CONFIG_JSON: &str = r#"{
    "ServiceSettings": {
        "SiteURL": "https://chat.example.com",
        "ListenAddress": ":8065"
    },
    "EmailSettings": {
        "EnableSignUpWithEmail": true,
        "SMTPServer": "smtp.example.com",
        "SendPushNotifications": true,
        "PushNotificationServer": "https://push-test.mattermost.com",
        "PushNotificationContents": "generic"
    },
    "TeamSettings": {
        "MaxUsersPerTeam": 50
    }
}"#;

/// The three push fields of a config, for comparisons
pub fn push_fields(config: &ServerConfig) -> (bool, String, PushContents) {
    let email = &config.email_settings;
    (
        email.send_push_notifications,
        email.push_notification_server.clone(),
        email
            .push_notification_contents
            .known()
            .expect("contents should be a known id"),
    )
}
