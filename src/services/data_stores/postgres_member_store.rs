use color_eyre::eyre::eyre;
use sqlx::PgPool;

use crate::domain::{
    Age, Member, MemberId, MemberProfile, MemberStore, MemberStoreError,
    NewMember,
};

pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: i32,
    first_name: String,
    last_name: String,
    furigana: String,
    nickname: String,
    image: String,
    role: String,
    part_time_job: String,
    description: String,
    age: i32,
    join_reason: String,
    goal: String,
    message: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = MemberStoreError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        Ok(Member {
            id: MemberId::new(row.id),
            profile: MemberProfile {
                first_name: row.first_name,
                last_name: row.last_name,
                furigana: row.furigana,
                nickname: row.nickname,
                role: row.role,
                part_time_job: row.part_time_job,
                description: row.description,
                age: Age::try_from(row.age).map_err(|e| {
                    MemberStoreError::UnexpectedError(eyre!(e))
                })?,
                join_reason: row.join_reason,
                goal: row.goal,
                message: row.message,
            },
            image: row.image,
        })
    }
}

const MEMBER_COLUMNS: &str = "id, first_name, last_name, furigana, nickname, \
     image, role, part_time_job, description, age, join_reason, goal, message";

#[async_trait::async_trait]
impl MemberStore for PostgresMemberStore {
    #[tracing::instrument(name = "Adding team member to PostgreSQL", skip_all)]
    async fn add_member(
        &mut self,
        member: NewMember,
    ) -> Result<Member, MemberStoreError> {
        let profile = &member.profile;
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            r#"
            INSERT INTO team_members (first_name, last_name, furigana,
                nickname, image, role, part_time_job, description, age,
                join_reason, goal, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.furigana)
        .bind(&profile.nickname)
        .bind(&member.image)
        .bind(&profile.role)
        .bind(&profile.part_time_job)
        .bind(&profile.description)
        .bind(profile.age.value_of())
        .bind(&profile.join_reason)
        .bind(&profile.goal)
        .bind(&profile.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        Member::try_from(row)
    }

    #[tracing::instrument(
        name = "Retrieving team member from PostgreSQL",
        skip_all
    )]
    async fn get_member(
        &self,
        id: &MemberId,
    ) -> Result<Member, MemberStoreError> {
        let row = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = $1"
        ))
        .bind(id.value_of())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => MemberStoreError::MemberNotFound,
            e => MemberStoreError::UnexpectedError(eyre!(e)),
        })?;

        Member::try_from(row)
    }

    #[tracing::instrument(
        name = "Retrieving team members from PostgreSQL",
        skip_all
    )]
    async fn get_members(&self) -> Result<Vec<Member>, MemberStoreError> {
        let rows = sqlx::query_as::<_, MemberRow>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        rows.into_iter().map(Member::try_from).collect()
    }

    #[tracing::instrument(
        name = "Updating team member in PostgreSQL",
        skip_all
    )]
    async fn update_member(
        &mut self,
        member: &Member,
    ) -> Result<(), MemberStoreError> {
        let profile = &member.profile;
        let result = sqlx::query(
            r#"
            UPDATE team_members
            SET first_name = $2, last_name = $3, furigana = $4,
                nickname = $5, image = $6, role = $7, part_time_job = $8,
                description = $9, age = $10,
                join_reason = $11, goal = $12, message = $13
            WHERE id = $1
            "#,
        )
        .bind(member.id.value_of())
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.furigana)
        .bind(&profile.nickname)
        .bind(&member.image)
        .bind(&profile.role)
        .bind(&profile.part_time_job)
        .bind(&profile.description)
        .bind(profile.age.value_of())
        .bind(&profile.join_reason)
        .bind(&profile.goal)
        .bind(&profile.message)
        .execute(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(MemberStoreError::MemberNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(
        name = "Deleting team member from PostgreSQL",
        skip_all
    )]
    async fn delete_member(
        &mut self,
        id: &MemberId,
    ) -> Result<(), MemberStoreError> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id.value_of())
            .execute(&self.pool)
            .await
            .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(MemberStoreError::MemberNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Deleting all team members", skip_all)]
    async fn delete_members(&mut self) -> Result<(), MemberStoreError> {
        sqlx::query("DELETE FROM team_members")
            .execute(&self.pool)
            .await
            .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        Ok(())
    }
}
