use clubdesk_core::AppResult;
use clubdesk_domain::RegistrationForm;
use tracing::info;

use crate::state::AppState;

struct SeedApplicant {
    name: &'static str,
    email: &'static str,
    department: &'static str,
    reason: &'static str,
    outcome: SeedOutcome,
}

enum SeedOutcome {
    Pending,
    Approved { team: &'static str },
    Rejected { note: &'static str },
}

const SEED_APPLICANTS: [SeedApplicant; 6] = [
    SeedApplicant {
        name: "Nguyen Van An",
        email: "an.nguyen@clubdesk.local",
        department: "dev",
        reason: "I build small web apps and want to work on club tooling.",
        outcome: SeedOutcome::Approved { team: "platform" },
    },
    SeedApplicant {
        name: "Tran Thi Hoa",
        email: "hoa.tran@clubdesk.local",
        department: "design",
        reason: "I would like to design posters for the autumn events.",
        outcome: SeedOutcome::Approved { team: "events" },
    },
    SeedApplicant {
        name: "Le Van Minh",
        email: "minh.le@clubdesk.local",
        department: "media",
        reason: "I shoot photos and edit short videos.",
        outcome: SeedOutcome::Approved { team: "events" },
    },
    SeedApplicant {
        name: "Pham Thanh",
        email: "thanh.pham@clubdesk.local",
        department: "media",
        reason: "I want to run the club social accounts.",
        outcome: SeedOutcome::Pending,
    },
    SeedApplicant {
        name: "Do Quang Huy",
        email: "huy.do@clubdesk.local",
        department: "dev",
        reason: "Looking for teammates for a hackathon.",
        outcome: SeedOutcome::Rejected {
            note: "Please reapply when the next intake opens.",
        },
    },
    SeedApplicant {
        name: "Vu Mai Chi",
        email: "chi.vu@clubdesk.local",
        department: "design",
        reason: "I enjoy UI work and want feedback on my portfolio.",
        outcome: SeedOutcome::Pending,
    },
];

/// Seeds demo applications through the regular services when storage is
/// empty.
pub async fn run(app_state: &AppState) -> AppResult<()> {
    if !app_state.review_service.search("").await?.is_empty() {
        info!("storage already holds applications; skipping demo seed");
        return Ok(());
    }

    for applicant in &SEED_APPLICANTS {
        let application = app_state
            .registration_service
            .submit(RegistrationForm {
                name: Some(applicant.name.to_owned()),
                email: Some(applicant.email.to_owned()),
                department: Some(applicant.department.to_owned()),
                reason: Some(applicant.reason.to_owned()),
            })
            .await?;

        match applicant.outcome {
            SeedOutcome::Pending => {}
            SeedOutcome::Approved { team } => {
                app_state
                    .review_service
                    .approve(application.id(), true)
                    .await?;
                app_state
                    .review_service
                    .assign_team(application.id(), team.to_owned())
                    .await?;
            }
            SeedOutcome::Rejected { note } => {
                app_state
                    .review_service
                    .reject(application.id(), true)
                    .await?;
                app_state
                    .review_service
                    .annotate(application.id(), note.to_owned(), true)
                    .await?;
            }
        }
    }

    info!(count = SEED_APPLICANTS.len(), "demo applications seeded");
    Ok(())
}
