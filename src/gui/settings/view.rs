//! Control tree for the push notification panel
//!
//! `render` turns the controller into plain data describing every control.
//! The egui panel only draws this tree, so what is shown, enabled or locked is
//! decided here once per frame.

use crate::{PushContents, PushContentsSetting, PushServiceType};

use super::messages::{MessageId, Messages};
use super::push::PushSettingsPanel;

/// Help text variants shown under the panel controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpText {
    /// Pointer to setup documentation, attached to the service type dropdown
    PushOff,
    HostedService,
    TestService,
    /// Building your own apps, attached to the server field
    EnterpriseAppStore,
}

impl HelpText {
    pub fn message(&self) -> MessageId {
        match self {
            HelpText::PushOff => MessageId::PushOffHelp,
            HelpText::HostedService => MessageId::HostedHelp,
            HelpText::TestService => MessageId::TestHelp,
            HelpText::EnterpriseAppStore => MessageId::EnterpriseAppStoreHelp,
        }
    }

    /// Only the "off" help belongs to the dropdown; the rest describe the relay
    pub fn on_service_dropdown(&self) -> bool {
        matches!(self, HelpText::PushOff)
    }
}

/// Help, enablement and visibility for one service type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTypeProfile {
    pub help: HelpText,
    pub server_enabled: bool,
    pub contents_enabled: bool,
    pub show_tos: bool,
}

impl ServiceTypeProfile {
    pub const fn for_type(service_type: PushServiceType) -> Self {
        match service_type {
            PushServiceType::Off => Self {
                help: HelpText::PushOff,
                server_enabled: false,
                contents_enabled: false,
                show_tos: false,
            },
            PushServiceType::HostedService => Self {
                help: HelpText::HostedService,
                server_enabled: false,
                contents_enabled: true,
                show_tos: true,
            },
            PushServiceType::TestService => Self {
                help: HelpText::TestService,
                server_enabled: false,
                contents_enabled: true,
                show_tos: false,
            },
            PushServiceType::Custom => Self {
                help: HelpText::EnterpriseAppStore,
                server_enabled: true,
                contents_enabled: true,
                show_tos: false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption<T> {
    pub value: T,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView<T> {
    pub id: &'static str,
    pub label: String,
    pub options: Vec<DropdownOption<T>>,
    pub value: T,
    /// Markdown
    pub help: Option<String>,
    pub enabled: bool,
    pub set_by_env: bool,
}

impl<T: PartialEq> DropdownView<T> {
    /// Text of the selected option
    pub fn selected_text(&self) -> &str {
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.text.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldView {
    pub id: &'static str,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub help: Option<String>,
    pub enabled: bool,
    pub set_by_env: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub checked: bool,
    /// Markdown
    pub label: String,
}

/// Everything the push notification panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSettingsView {
    pub title: String,
    pub service_type: DropdownView<PushServiceType>,
    pub tos: Option<CheckboxView>,
    pub server: TextFieldView,
    /// An unrecognized stored id selects no option
    pub contents: DropdownView<PushContentsSetting>,
    pub save_enabled: bool,
    pub cancel_enabled: bool,
    pub server_error: Option<String>,
}

/// Service type choices; the hosted service is offered only when licensed
pub fn service_type_options(
    panel: &PushSettingsPanel,
    messages: &Messages,
) -> Vec<DropdownOption<PushServiceType>> {
    let hosted_allowed = panel.license().grants_hosted_push();
    PushServiceType::ALL
        .into_iter()
        .filter(|t| *t != PushServiceType::HostedService || hosted_allowed)
        .map(|value| {
            let id = match value {
                PushServiceType::Off => MessageId::PushOff,
                PushServiceType::HostedService => MessageId::HostedOption,
                PushServiceType::TestService => MessageId::TestOption,
                PushServiceType::Custom => MessageId::CustomOption,
            };
            DropdownOption {
                value,
                text: messages.text(id).to_string(),
            }
        })
        .collect()
}

fn contents_options(messages: &Messages) -> Vec<DropdownOption<PushContentsSetting>> {
    PushContents::ALL
        .into_iter()
        .map(|value| {
            let id = match value {
                PushContents::NameOnly => MessageId::NameOnlyContents,
                PushContents::NameAndChannel => MessageId::NameAndChannelContents,
                PushContents::FullMessage => MessageId::FullMessageContents,
            };
            DropdownOption {
                value: value.into(),
                text: messages.text(id).to_string(),
            }
        })
        .collect()
}

/// Build the control tree for the current panel state
pub fn render(panel: &PushSettingsPanel, messages: &Messages) -> PushSettingsView {
    let state = panel.state();
    let profile = ServiceTypeProfile::for_type(state.service_type);
    let help = messages.markdown(profile.help.message());
    let (dropdown_help, server_help) = if profile.help.on_service_dropdown() {
        (Some(help), None)
    } else {
        (None, Some(help))
    };

    let service_locked = panel.is_service_type_set_by_env();
    let server_locked = panel.is_server_set_by_env();
    let contents_locked = panel.is_contents_set_by_env();

    PushSettingsView {
        title: messages.text(MessageId::Title).to_string(),
        service_type: DropdownView {
            id: "pushNotificationServerType",
            label: messages.text(MessageId::PushTitle).to_string(),
            options: service_type_options(panel, messages),
            value: state.service_type,
            help: dropdown_help,
            enabled: !service_locked,
            set_by_env: service_locked,
        },
        tos: profile.show_tos.then(|| CheckboxView {
            checked: state.tos_accepted,
            label: messages.markdown(MessageId::AgreeHostedTerms),
        }),
        server: TextFieldView {
            id: "pushNotificationServer",
            label: messages.text(MessageId::PushServerTitle).to_string(),
            placeholder: messages.text(MessageId::PushServerExample).to_string(),
            value: state.server_address.clone(),
            help: server_help,
            enabled: profile.server_enabled && !server_locked,
            set_by_env: server_locked,
        },
        contents: DropdownView {
            id: "pushNotificationContents",
            label: messages.text(MessageId::PushContentTitle).to_string(),
            options: contents_options(messages),
            value: state.contents.clone(),
            help: Some(messages.markdown(MessageId::PushContentDesc)),
            enabled: profile.contents_enabled && !contents_locked,
            set_by_env: contents_locked,
        },
        save_enabled: panel.can_save(),
        cancel_enabled: panel.save_needed(),
        server_error: panel.server_error().map(str::to_string),
    }
}
