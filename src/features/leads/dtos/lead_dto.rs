use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::core::error::AppError;
use crate::features::leads::models::{Language, Lead, NewLead};
use crate::features::villages::VillageService;
use crate::shared::constants::{NAME_MAX_CHARS, NAME_MIN_CHARS};
use crate::shared::validation::{field_error, to_field_errors, MOBILE_PHONE_REGEX};

/// Order in which field errors are reported, matching the form layout
const FIELD_ORDER: [&str; 4] = ["name", "phone", "village", "language"];

/// Request DTO for a farmer callback request
///
/// Missing fields default to empty strings so they are reported as field
/// errors instead of failing body parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeadDto {
    /// Farmer's name, 2-100 characters
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Ramesh Kumar")]
    pub name: String,

    /// 10-digit mobile number starting with 6-9
    #[serde(default)]
    #[validate(regex(path = *MOBILE_PHONE_REGEX, message = "Enter a valid 10-digit mobile number"))]
    #[schema(example = "9876543210")]
    pub phone: String,

    /// Village id from `/api/villages`
    #[serde(default)]
    #[validate(custom(function = "validate_village"))]
    #[schema(example = "kolar-kolar")]
    pub village: String,

    /// One of `en`, `kn`, `hi`
    #[serde(default)]
    #[validate(custom(function = "validate_language"))]
    #[schema(example = "kn")]
    pub language: String,
}

impl SubmitLeadDto {
    /// Validate and convert into a lead ready to be stored
    pub fn into_new_lead(self, user_agent: Option<String>) -> Result<NewLead, AppError> {
        self.validate()
            .map_err(|e| AppError::Validation(to_field_errors(&e, &FIELD_ORDER)))?;

        let language = self
            .language
            .parse::<Language>()
            .map_err(AppError::BadRequest)?;

        Ok(NewLead {
            name: self.name.trim().to_string(),
            phone: self.phone,
            village: self.village,
            language,
            user_agent,
        })
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let chars = name.trim().chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(field_error(
            "name_too_short",
            format!("Name must be at least {} characters", NAME_MIN_CHARS),
        ));
    }
    if chars > NAME_MAX_CHARS {
        return Err(field_error(
            "name_too_long",
            format!("Name must not exceed {} characters", NAME_MAX_CHARS),
        ));
    }
    Ok(())
}

fn validate_village(village: &str) -> Result<(), ValidationError> {
    if village.trim().is_empty() {
        return Err(field_error("village_required", "Village is required"));
    }
    if !VillageService::new().exists(village) {
        return Err(field_error("village_unknown", "Select a valid village"));
    }
    Ok(())
}

fn validate_language(language: &str) -> Result<(), ValidationError> {
    language
        .parse::<Language>()
        .map(|_| ())
        .map_err(|_| field_error("language_invalid", "Language must be one of: en, kn, hi"))
}

/// Response DTO for a lead submission
///
/// Exactly one of `leadId` (new lead) or `duplicate` (suppressed repeat) is set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeadResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<bool>,
}

impl SubmitLeadResponseDto {
    pub fn created(lead_id: String) -> Self {
        Self {
            success: true,
            message: "Lead captured successfully".to_string(),
            lead_id: Some(lead_id),
            duplicate: None,
        }
    }

    pub fn duplicate() -> Self {
        Self {
            success: true,
            message: "Request already received. We'll call you soon!".to_string(),
            lead_id: None,
            duplicate: Some(true),
        }
    }
}

/// Response DTO for the lead listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeadListResponseDto {
    pub success: bool,
    pub count: usize,
    /// Newest first
    pub leads: Vec<Lead>,
}

impl From<Vec<Lead>> for LeadListResponseDto {
    fn from(leads: Vec<Lead>) -> Self {
        Self {
            success: true,
            count: leads.len(),
            leads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::FieldError;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_dto() -> SubmitLeadDto {
        SubmitLeadDto {
            name: Name().fake(),
            phone: "9876543210".to_string(),
            village: "kolar-kolar".to_string(),
            language: "kn".to_string(),
        }
    }

    fn field_errors(dto: SubmitLeadDto) -> Vec<FieldError> {
        match dto.into_new_lead(None) {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_dto_converts() {
        let dto = SubmitLeadDto {
            name: "  Ramesh Kumar  ".to_string(),
            ..valid_dto()
        };

        let lead = dto.into_new_lead(Some("agent".to_string())).unwrap();
        assert_eq!(lead.name, "Ramesh Kumar");
        assert_eq!(lead.language, Language::Kn);
        assert_eq!(lead.user_agent.as_deref(), Some("agent"));
    }

    #[test]
    fn test_fake_names_are_accepted() {
        for _ in 0..20 {
            assert!(valid_dto().validate().is_ok());
        }
    }

    #[test]
    fn test_all_fields_invalid_reports_four_errors_in_order() {
        let dto = SubmitLeadDto {
            name: "R".to_string(),
            phone: "1234567890".to_string(),
            village: "".to_string(),
            language: "xx".to_string(),
        };

        let errors = field_errors(dto);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "phone", "village", "language"]);
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
        assert_eq!(errors[1].message, "Enter a valid 10-digit mobile number");
        assert_eq!(errors[2].message, "Village is required");
        assert_eq!(errors[3].message, "Language must be one of: en, kn, hi");
    }

    #[test]
    fn test_missing_fields_are_field_errors() {
        let dto: SubmitLeadDto = serde_json::from_str("{}").unwrap();
        assert_eq!(field_errors(dto).len(), 4);
    }

    #[test]
    fn test_name_length_bounds() {
        let at_min = SubmitLeadDto {
            name: "Ra".to_string(),
            ..valid_dto()
        };
        assert!(at_min.validate().is_ok());

        let at_max = SubmitLeadDto {
            name: "a".repeat(100),
            ..valid_dto()
        };
        assert!(at_max.validate().is_ok());

        let too_long = SubmitLeadDto {
            name: "a".repeat(101),
            ..valid_dto()
        };
        let errors = field_errors(too_long);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Name must not exceed 100 characters");

        // Counted in characters, not bytes
        let kannada = SubmitLeadDto {
            name: "ರಾಮ".to_string(),
            ..valid_dto()
        };
        assert!(kannada.validate().is_ok());

        let blank = SubmitLeadDto {
            name: "   ".to_string(),
            ..valid_dto()
        };
        assert_eq!(field_errors(blank)[0].field, "name");
    }

    #[test]
    fn test_name_messages_follow_limits() {
        let too_short = SubmitLeadDto {
            name: "a".repeat(NAME_MIN_CHARS - 1),
            ..valid_dto()
        };
        assert_eq!(
            field_errors(too_short)[0].message,
            format!("Name must be at least {} characters", NAME_MIN_CHARS)
        );

        let too_long = SubmitLeadDto {
            name: "a".repeat(NAME_MAX_CHARS + 1),
            ..valid_dto()
        };
        assert_eq!(
            field_errors(too_long)[0].message,
            format!("Name must not exceed {} characters", NAME_MAX_CHARS)
        );
    }

    #[test]
    fn test_unknown_village_is_rejected() {
        let dto = SubmitLeadDto {
            village: "atlantis".to_string(),
            ..valid_dto()
        };

        let errors = field_errors(dto);
        assert_eq!(
            errors,
            vec![FieldError::new("village", "Select a valid village")]
        );
    }

    #[test]
    fn test_response_shapes() {
        let created = serde_json::to_value(SubmitLeadResponseDto::created("lead_x".into())).unwrap();
        assert_eq!(created["leadId"], "lead_x");
        assert!(created.get("duplicate").is_none());

        let duplicate = serde_json::to_value(SubmitLeadResponseDto::duplicate()).unwrap();
        assert_eq!(duplicate["duplicate"], true);
        assert_eq!(duplicate["success"], true);
        assert!(duplicate.get("leadId").is_none());
    }
}
