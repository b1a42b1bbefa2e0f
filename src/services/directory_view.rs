use std::ops::RangeInclusive;

use crate::{
    app_state::AppState,
    domain::{
        directory::{
            clamp_page, filter_members, page_slice, page_window, total_pages,
            DirectorySummary, PageControls,
        },
        Member, MemberAPIError, MemberId, MemberSubmission,
    },
    services::member_service,
};

/// The admin dashboard's table: a snapshot of every member plus the search
/// query and page the admin is looking at. Changes go through the member
/// service and are followed by a fresh fetch, never a local patch.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    members: Vec<Member>,
    query: String,
    page: usize,
}

impl DirectoryView {
    pub fn new(members: Vec<Member>) -> Self {
        let mut view = Self {
            members: Vec::new(),
            query: String::new(),
            page: 1,
        };
        view.replace_members(members);
        view
    }

    pub async fn load(state: &AppState) -> Result<Self, MemberAPIError> {
        Ok(Self::new(member_service::list_members(state).await?))
    }

    #[tracing::instrument(name = "Refreshing directory view", skip_all)]
    pub async fn refresh(
        &mut self,
        state: &AppState,
    ) -> Result<(), MemberAPIError> {
        let members = member_service::list_members(state).await?;
        self.replace_members(members);
        Ok(())
    }

    fn replace_members(&mut self, mut members: Vec<Member>) {
        members.sort_by_key(|member| member.id);
        self.members = members;
        self.page = clamp_page(self.page, self.total_pages());
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    pub fn filtered(&self) -> Vec<&Member> {
        filter_members(&self.members, &self.query)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len())
    }

    pub fn visible(&self) -> Vec<&Member> {
        page_slice(&self.filtered(), self.page).to_vec()
    }

    pub fn page_window(&self) -> RangeInclusive<usize> {
        page_window(self.page, self.total_pages())
    }

    pub fn controls(&self) -> PageControls {
        PageControls::new(self.page, self.total_pages())
    }

    pub fn summary(&self) -> DirectorySummary {
        DirectorySummary::new(
            self.members.len(),
            self.filtered().len(),
            self.page,
        )
    }

    /// On failure the view is left exactly as it was.
    pub async fn edit_member(
        &mut self,
        state: &AppState,
        id: MemberId,
        submission: MemberSubmission,
    ) -> Result<Member, MemberAPIError> {
        let member =
            member_service::update_member(state, id, submission).await?;
        self.refresh(state).await?;
        Ok(member)
    }

    /// On failure the view is left exactly as it was.
    pub async fn delete_member(
        &mut self,
        state: &AppState,
        id: MemberId,
    ) -> Result<(), MemberAPIError> {
        member_service::delete_member(state, id).await?;
        self.refresh(state).await
    }
}
