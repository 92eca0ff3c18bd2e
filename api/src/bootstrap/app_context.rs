use std::sync::Arc;
use std::time::Duration;

use crate::application::access::{AdminCredentials, OriginPolicy, ProbePolicy};
use crate::application::ports::blog_repository::BlogRepository;
use crate::application::ports::certification_repository::CertificationRepository;
use crate::application::ports::education_repository::EducationRepository;
use crate::application::ports::email_sender::EmailSender;
use crate::application::ports::experience_repository::ExperienceRepository;
use crate::application::ports::personal_info_repository::PersonalInfoRepository;
use crate::application::ports::project_repository::ProjectRepository;
use crate::application::ports::skill_repository::SkillRepository;
use crate::application::services::rate_limit::{Bucket, SlidingWindowLimiter};
use crate::application::use_cases::contact::submit_contact::ContactSettings;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

pub struct Repositories {
    pub blogs: Arc<dyn BlogRepository>,
    pub personal_info: Arc<dyn PersonalInfoRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub experiences: Arc<dyn ExperienceRepository>,
    pub educations: Arc<dyn EducationRepository>,
    pub certifications: Arc<dyn CertificationRepository>,
    pub skills: Arc<dyn SkillRepository>,
}

pub struct AppServices {
    repos: Repositories,
    email_sender: Option<Arc<dyn EmailSender>>,
    limiter: Arc<SlidingWindowLimiter>,
    origin_policy: OriginPolicy,
    probe_policy: ProbePolicy,
    admin: Option<Arc<AdminCredentials>>,
    contact_settings: ContactSettings,
}

impl AppServices {
    /// Consumes `cfg.admin_password`; only its argon2 hash outlives this call.
    pub fn new(
        cfg: &mut Config,
        repos: Repositories,
        email_sender: Option<Arc<dyn EmailSender>>,
    ) -> anyhow::Result<Self> {
        let admin = match (&cfg.admin_username, cfg.admin_password.take()) {
            (Some(user), Some(pass)) => Some(Arc::new(AdminCredentials::hash(user, &pass)?)),
            _ => {
                tracing::warn!("admin_credentials_missing_admin_routes_disabled");
                None
            }
        };
        let probe_policy = ProbePolicy::new(cfg.blocked_paths.as_deref());
        tracing::info!(patterns = probe_policy.len(), "probe_guard_ready");
        Ok(Self {
            repos,
            email_sender,
            limiter: Arc::new(SlidingWindowLimiter::new()),
            origin_policy: OriginPolicy::new(&cfg.cors_allowed_origins, cfg.api_server_key.clone()),
            probe_policy,
            admin,
            contact_settings: ContactSettings {
                from: cfg.contact_email_from.clone(),
                to: cfg.contact_email_to.clone(),
                website_domain: cfg.contact_email_domain.clone(),
            },
        })
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn blog_repo(&self) -> Arc<dyn BlogRepository> {
        self.services.repos.blogs.clone()
    }

    pub fn personal_info_repo(&self) -> Arc<dyn PersonalInfoRepository> {
        self.services.repos.personal_info.clone()
    }

    pub fn project_repo(&self) -> Arc<dyn ProjectRepository> {
        self.services.repos.projects.clone()
    }

    pub fn experience_repo(&self) -> Arc<dyn ExperienceRepository> {
        self.services.repos.experiences.clone()
    }

    pub fn education_repo(&self) -> Arc<dyn EducationRepository> {
        self.services.repos.educations.clone()
    }

    pub fn certification_repo(&self) -> Arc<dyn CertificationRepository> {
        self.services.repos.certifications.clone()
    }

    pub fn skill_repo(&self) -> Arc<dyn SkillRepository> {
        self.services.repos.skills.clone()
    }

    pub fn email_sender(&self) -> Option<Arc<dyn EmailSender>> {
        self.services.email_sender.clone()
    }

    pub fn limiter(&self) -> Arc<SlidingWindowLimiter> {
        self.services.limiter.clone()
    }

    pub fn origin_policy(&self) -> &OriginPolicy {
        &self.services.origin_policy
    }

    pub fn probe_policy(&self) -> &ProbePolicy {
        &self.services.probe_policy
    }

    pub fn admin(&self) -> Option<Arc<AdminCredentials>> {
        self.services.admin.clone()
    }

    pub fn contact_settings(&self) -> &ContactSettings {
        &self.services.contact_settings
    }

    /// `(max requests, window)` for a rate-limit bucket.
    pub fn rate_budget(&self, bucket: Bucket) -> (u32, Duration) {
        match bucket {
            Bucket::Contact => (
                self.cfg.contact_max_requests,
                Duration::from_secs(self.cfg.contact_window_minutes * 60),
            ),
            Bucket::Blog => (
                self.cfg.blog_max_requests,
                Duration::from_secs(self.cfg.blog_window_minutes * 60),
            ),
        }
    }
}
