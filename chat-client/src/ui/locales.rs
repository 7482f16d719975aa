//! # Localized Strings
//!
//! Fixed string tables for the sign-in and home screens. The table is picked
//! once from `CHAT_LANG` at startup.

use std::fmt;
use std::str::FromStr;

use crate::auth::{CodeButtonLabel, ToggleOffer};
use crate::core::error::AppError;

/// Supported string tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Cn,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Cn => "cn",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::Cn => &CN,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "cn" | "zh" => Ok(Lang::Cn),
            other => Err(AppError::Config(format!("Unknown language '{}' (expected en or cn)", other))),
        }
    }
}

/// One string table
#[derive(Debug)]
pub struct Strings {
    pub identity_placeholder: &'static str,
    pub code_placeholder: &'static str,
    pub get_code: &'static str,
    pub code_sent: &'static str,
    pub login_register: &'static str,
    pub email_placeholder: &'static str,
    pub password_placeholder: &'static str,
    pub submit: &'static str,
    pub divider: &'static str,
    pub use_code: &'static str,
    pub use_wechat: &'static str,
    pub use_password: &'static str,
    pub scan_hint: &'static str,
    pub open_in_browser: &'static str,
    pub delegated_unconfigured: &'static str,
    pub signed_in_as: &'static str,
    pub finishing_sign_in: &'static str,
    pub sign_out: &'static str,
    pub enter_hint: &'static str,
}

pub static EN: Strings = Strings {
    identity_placeholder: "Phone / Email",
    code_placeholder: "Code",
    get_code: "Get Code",
    code_sent: "Sent",
    login_register: "Login / Register",
    email_placeholder: "Email",
    password_placeholder: "Password",
    submit: "Submit",
    divider: "OR",
    use_code: "Use code to sign in",
    use_wechat: "Use WeChat to sign in",
    use_password: "Use password to sign in",
    scan_hint: "Scan the QR code with WeChat",
    open_in_browser: "Open WeChat sign-in in browser",
    delegated_unconfigured: "WeChat sign-in is not configured",
    signed_in_as: "Signed in as",
    finishing_sign_in: "Finishing sign-in...",
    sign_out: "Sign out",
    enter_hint: "Press <Enter> to submit",
};

pub static CN: Strings = Strings {
    identity_placeholder: "手机号 / 邮箱",
    code_placeholder: "验证码",
    get_code: "获取验证码",
    code_sent: "已发送",
    login_register: "登录 / 注册",
    email_placeholder: "邮箱",
    password_placeholder: "密码",
    submit: "提交",
    divider: "OR",
    use_code: "使用验证码登陆",
    use_wechat: "使用微信登陆",
    use_password: "使用密码登陆",
    scan_hint: "请使用微信扫码",
    open_in_browser: "在浏览器中打开微信登录",
    delegated_unconfigured: "未配置微信登录",
    signed_in_as: "当前用户",
    finishing_sign_in: "正在登录...",
    sign_out: "退出登录",
    enter_hint: "按 <Enter> 提交",
};

impl Strings {
    /// Label for a toggle affordance.
    pub fn offer(&self, offer: ToggleOffer) -> &'static str {
        match offer {
            ToggleOffer::Code => self.use_code,
            ToggleOffer::Delegated => self.use_wechat,
            ToggleOffer::Password => self.use_password,
        }
    }

    pub fn code_button(&self, label: CodeButtonLabel) -> &'static str {
        match label {
            CodeButtonLabel::GetCode => self.get_code,
            CodeButtonLabel::Sent => self.code_sent,
        }
    }
}
