use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::certification_repository::CertificationRepository;
use crate::application::ports::education_repository::EducationRepository;
use crate::application::ports::email_sender::{EmailError, EmailSender, OutgoingEmail};
use crate::application::ports::experience_repository::ExperienceRepository;
use crate::application::ports::personal_info_repository::PersonalInfoRepository;
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::ports::skill_repository::SkillRepository;
use crate::application::use_cases::blogs::test_support::InMemoryBlogRepository;
use crate::bootstrap::app_context::{AppContext, AppServices, Repositories};
use crate::bootstrap::config::Config;
use crate::domain::blogs::blog::Blog;
use crate::domain::portfolio::certification::Certification;
use crate::domain::portfolio::education::Education;
use crate::domain::portfolio::experience::Experience;
use crate::domain::portfolio::personal_info::PersonalInfo;
use crate::domain::portfolio::project::Project;
use crate::domain::portfolio::skill::SkillGroup;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "secret";

#[derive(Default)]
pub struct InMemoryPortfolio {
    pub personal_info: Mutex<Option<PersonalInfo>>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
}

#[async_trait]
impl PersonalInfoRepository for InMemoryPortfolio {
    async fn first(&self) -> anyhow::Result<Option<PersonalInfo>> {
        Ok(self.personal_info.lock().unwrap().clone())
    }

    async fn upsert(&self, info: &PersonalInfo) -> anyhow::Result<PersonalInfo> {
        *self.personal_info.lock().unwrap() = Some(info.clone());
        Ok(info.clone())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryPortfolio {
    async fn list_active_by_display_order_desc(&self) -> anyhow::Result<Vec<Project>> {
        Ok(self.projects.clone())
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryPortfolio {
    async fn list_by_display_order_desc(&self) -> anyhow::Result<Vec<Experience>> {
        Ok(vec![])
    }
}

#[async_trait]
impl EducationRepository for InMemoryPortfolio {
    async fn list_all(&self) -> anyhow::Result<Vec<Education>> {
        Ok(vec![])
    }
}

#[async_trait]
impl CertificationRepository for InMemoryPortfolio {
    async fn list_all(&self) -> anyhow::Result<Vec<Certification>> {
        Ok(vec![])
    }
}

#[async_trait]
impl SkillRepository for InMemoryPortfolio {
    async fn list_by_display_order(&self) -> anyhow::Result<Vec<SkillGroup>> {
        Ok(self.skills.clone())
    }
}

#[derive(Default)]
pub struct Outbox {
    pub sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait]
impl EmailSender for Outbox {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub fn context(
    mut cfg: Config,
    blogs: Vec<Blog>,
    portfolio: InMemoryPortfolio,
    sender: Option<Arc<dyn EmailSender>>,
) -> AppContext {
    let portfolio = Arc::new(portfolio);
    let repos = Repositories {
        blogs: Arc::new(InMemoryBlogRepository::with(blogs)),
        personal_info: portfolio.clone(),
        projects: portfolio.clone(),
        experiences: portfolio.clone(),
        educations: portfolio.clone(),
        certifications: portfolio.clone(),
        skills: portfolio,
    };
    let services = AppServices::new(&mut cfg, repos, sender).unwrap();
    AppContext::new(cfg, services)
}

pub fn context_with_blogs(blogs: Vec<Blog>) -> AppContext {
    context(Config::sample(), blogs, InMemoryPortfolio::default(), None)
}
