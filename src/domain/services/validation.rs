use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::models::reservation::ReservationKind;
use crate::domain::models::user::Registration;
use crate::domain::services::pricing;
use crate::error::AppError;

pub fn validate_email(email: &str) -> Result<(), AppError> {
    let mut parts = email.split('@');
    let (local, domain) = (parts.next().unwrap_or(""), parts.next().unwrap_or(""));
    let well_formed = parts.next().is_none()
        && !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace);
    if well_formed {
        Ok(())
    } else {
        Err(AppError::Validation("Enter a valid email address".into()))
    }
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(AppError::Validation(
            "Password must contain at least one letter and one number".into(),
        ));
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<(), AppError> {
    if password != confirmation {
        return Err(AppError::Validation("Passwords do not match".into()));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    let len = phone.chars().count();
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+'));
    if (7..=15).contains(&len) && allowed {
        Ok(())
    } else {
        Err(AppError::Validation("Enter a valid phone number".into()))
    }
}

pub fn validate_document(document: &str) -> Result<(), AppError> {
    let len = document.chars().count();
    let allowed = document
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.'));
    if (5..=20).contains(&len) && allowed {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Identity document must be 5 to 20 digits".into(),
        ))
    }
}

pub fn validate_name(name: &str) -> Result<(), AppError> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len < 2 {
        return Err(AppError::Validation(
            "Name must be at least 2 characters".into(),
        ));
    }
    if len > 50 {
        return Err(AppError::Validation(
            "Name cannot exceed 50 characters".into(),
        ));
    }
    let allowed = trimmed
        .chars()
        .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.'));
    if !allowed {
        return Err(AppError::Validation(
            "Name can only contain letters and spaces".into(),
        ));
    }
    Ok(())
}

pub fn validate_observations(observations: Option<&str>) -> Result<(), AppError> {
    if let Some(text) = observations {
        if text.chars().count() > 500 {
            return Err(AppError::Validation(
                "Observations cannot exceed 500 characters".into(),
            ));
        }
    }
    Ok(())
}

/// Collapse repeated whitespace and strip angle brackets from free text.
pub fn sanitize_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(['<', '>'], "")
}

/// Below-minimum private headcounts are a warning, not an error: the booking
/// may proceed and the flat surcharge applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadcountAssessment {
    WithinMinimum,
    BelowPrivateMinimum { minimum: u32 },
}

pub fn validate_headcount(
    config: &Config,
    kind: ReservationKind,
    start: NaiveDate,
    headcount: u32,
) -> Result<HeadcountAssessment, AppError> {
    if headcount < 1 {
        return Err(AppError::Validation("At least 1 person is required".into()));
    }
    if headcount > config.venue_capacity {
        return Err(AppError::Validation(format!(
            "Venue capacity is {} people",
            config.venue_capacity
        )));
    }
    if kind == ReservationKind::Private {
        let minimum = pricing::minimum_headcount(config, start);
        if headcount < minimum {
            return Ok(HeadcountAssessment::BelowPrivateMinimum { minimum });
        }
    }
    Ok(HeadcountAssessment::WithinMinimum)
}

pub fn validate_registration(registration: &Registration) -> Result<(), AppError> {
    validate_name(&registration.name)?;
    validate_email(&registration.email)?;
    validate_phone(&registration.phone)?;
    validate_document(&registration.document)?;
    validate_password(&registration.password)?;
    validate_password_confirmation(&registration.password, &registration.password_confirmation)
}
