//! Errors reported by the auth-and-data service.
//!
//! Messages are Arabic because the forms show them to visitors verbatim.

use store::RequestStatus;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("البريد الإلكتروني أو كلمة المرور غير صحيحة")]
    InvalidCredentials,

    #[error("يوجد حساب مسجل بهذا البريد الإلكتروني")]
    EmailTaken,

    #[error("تم حظر هذا الحساب، يرجى التواصل مع الإدارة")]
    AccountBanned,

    #[error("{0}")]
    Validation(String),

    #[error("العنصر المطلوب غير موجود ({kind}: {id})")]
    NotFound { kind: &'static str, id: String },

    #[error("لا يمكن نقل الطلب من \"{}\" إلى \"{}\"", .from.label(), .to.label())]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("غير مسموح بهذه العملية")]
    Forbidden,

    #[error("تعذر حفظ كلمة المرور: {0}")]
    PasswordHash(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(kind: &'static str, id: &str) -> Self {
        ApiError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
