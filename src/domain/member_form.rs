use validator::Validate;

use super::{
    Age, Avatar, AvatarUpload, MemberAPIError, MemberProfile, MemberSubmission,
    ValidationError,
};

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "All fields except part-time job and avatar are required";

/// Registration/edit form fields as submitted, before any domain checks.
#[derive(Debug, Clone, Default, Validate)]
pub struct MemberForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub furigana: String,
    #[validate(length(min = 1))]
    pub nickname: String,
    #[validate(length(min = 1))]
    pub role: String,
    pub part_time_job: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub age: String,
    #[validate(length(min = 1))]
    pub join_reason: String,
    #[validate(length(min = 1))]
    pub goal: String,
    #[validate(length(min = 1))]
    pub message: String,
    pub image: String,
    pub avatar: Option<AvatarUpload>,
}

impl MemberForm {
    /// Assigns a text field by its wire name. Unknown names are ignored.
    pub fn set_field(&mut self, name: &str, value: String) {
        let field = match name {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "furigana" => &mut self.furigana,
            "nickname" => &mut self.nickname,
            "role" => &mut self.role,
            "partTimeJob" => &mut self.part_time_job,
            "description" => &mut self.description,
            "age" => &mut self.age,
            "joinReason" => &mut self.join_reason,
            "goal" => &mut self.goal,
            "message" => &mut self.message,
            "image" => &mut self.image,
            _ => return,
        };
        *field = value;
    }

    /// Presence is checked first, then age, then avatar size, so nothing
    /// leaves this function unless the whole submission is acceptable.
    pub fn parse(self) -> Result<MemberSubmission, MemberAPIError> {
        self.validate().map_err(|_| {
            ValidationError::new(REQUIRED_FIELDS_MESSAGE.to_string())
        })?;

        let age = Age::parse(&self.age)?;

        let avatar = self
            .avatar
            .filter(|upload| !upload.is_empty())
            .map(Avatar::parse)
            .transpose()?;

        let image = Some(self.image).filter(|image| !image.is_empty());

        Ok(MemberSubmission {
            profile: MemberProfile {
                first_name: self.first_name,
                last_name: self.last_name,
                furigana: self.furigana,
                nickname: self.nickname,
                role: self.role,
                part_time_job: self.part_time_job,
                description: self.description,
                age,
                join_reason: self.join_reason,
                goal: self.goal,
                message: self.message,
            },
            image,
            avatar,
        })
    }
}
