//! Shared test helpers for in-memory lifecycle integration tests.

use std::sync::Arc;

use casework::project::{
    adapters::memory::InMemoryProjectStore,
    checklist::{
        AcademyDetailsTask, ArticlesOfAssociationTask, BankDetailsChangingTask,
        CheckAccuracyOfHigherNeedsTask, CheckAndConfirmFinancialInformationTask,
        ClosureOrTransferDeclarationTask, CommercialTransferAgreementTask,
        CompleteNotificationOfChangeTask, ConfirmDateAcademyOpenedTask,
        ConfirmDateAcademyTransferredTask, ConversionChurchSupplementalAgreementTask,
        ConversionGrantTask, ConversionMasterFundingAgreementTask,
        ConversionSponsoredSupportGrantTask, ConversionStakeholderKickOffTask,
        ConversionSupplementalFundingAgreementTask, ConversionTasksData,
        DeclarationOfExpenditureCertificateTask, DeedOfNovationAndVariationTask,
        DeedOfTerminationForTheMasterFundingAgreementTask, DeedOfVariationTask,
        DeedTerminationChurchAgreementTask, DirectionToTransferTask, FormMTask, HandoverTask,
        IncomingTrustCompletedTask, LandConsentLetterTask, LandQuestionnaireTask,
        LandRegistryTask, OneHundredAndTwentyFiveYearLeaseTask, ProposedCapacityTask,
        ReceiveGrantPaymentCertificateTask, RedactAndSendDocumentsTask, RedactAndSendTask,
        RequestNewUrnAndRecordTask, RiskProtectionArrangementOption,
        RiskProtectionArrangementTask, RpaPolicyTask, SchoolCompletedTask, ShareInformationTask,
        SponsoredSupportGrantType, SubleasesTask, TaskRecord, TenancyAtWillTask,
        TransferChurchSupplementalAgreementTask, TransferConditionsMetTask,
        TransferMasterFundingAgreementTask, TransferSponsoredSupportGrantTask,
        TransferStakeholderKickOffTask, TransferSupplementalFundingAgreementTask,
        TransferTasksData, TrustModificationOrderTask, UpdateEsfaTask,
    },
    domain::{
        ContactId, HandoverAssignment, KeyContactRole, NewProject, Project, ProjectDetailsUpdate,
        ProjectType, UserId,
    },
    services::ProjectLifecycleService,
};
use chrono::NaiveDate;
use eyre::OptionExt;
use mockable::DefaultClock;
use rstest::fixture;

/// Lifecycle service over an in-memory store.
pub type TestService = ProjectLifecycleService<InMemoryProjectStore, DefaultClock>;

/// Provides a service backed by a fresh in-memory store for each test.
#[fixture]
pub fn service() -> TestService {
    ProjectLifecycleService::new(
        Arc::new(InMemoryProjectStore::new()),
        Arc::new(DefaultClock),
    )
}

/// Returns the date used as a confirmed conversion or transfer date.
///
/// # Errors
///
/// Returns an error if the calendar date is invalid.
pub fn significant_date() -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 12, 1).ok_or_eyre("valid significant date")
}

/// Returns a handover assignment carrying every sharepoint link the project
/// type needs.
#[must_use]
pub fn handover_for(project_type: ProjectType, user: UserId) -> HandoverAssignment {
    let assignment = HandoverAssignment::new(
        user,
        "https://sharepoint.example/establishment",
        "https://sharepoint.example/incoming-trust",
    );
    match project_type {
        ProjectType::Transfer => {
            assignment.with_outgoing_trust_sharepoint_link("https://sharepoint.example/outgoing")
        }
        ProjectType::Conversion => assignment,
    }
}

/// Creates a project and hands it over so it is active.
///
/// # Errors
///
/// Returns an error if creation or handover fails.
pub async fn active_project(service: &TestService, request: NewProject) -> eyre::Result<Project> {
    let project = service.create_project(request).await?;
    let assignment = handover_for(project.project_type(), UserId::new());
    Ok(service
        .assign_on_handover(project.id(), &assignment)
        .await?)
}

/// Creates an active project with a confirmed date, every checklist task
/// settled, every key contact and the main contact assigned, and all
/// conditions met.
///
/// # Errors
///
/// Returns an error if any setup step fails.
pub async fn ready_to_complete(
    service: &TestService,
    project_type: ProjectType,
) -> eyre::Result<Project> {
    let request = NewProject::new(project_type).with_significant_date(significant_date()?, false);
    let project = active_project(service, request).await?;
    service
        .update_task_data(project.id(), &complete_record(project_type)?)
        .await?;
    for role in [
        KeyContactRole::Headteacher,
        KeyContactRole::ChairOfGovernors,
        KeyContactRole::IncomingTrustCeo,
        KeyContactRole::OutgoingTrustCeo,
    ] {
        service
            .assign_key_contact(project.id(), role, Some(ContactId::new()))
            .await?;
    }
    Ok(service
        .update_project_details(
            project.id(),
            ProjectDetailsUpdate {
                all_conditions_met: Some(true),
                main_contact_id: Some(Some(ContactId::new())),
                ..ProjectDetailsUpdate::default()
            },
        )
        .await?)
}

/// Returns a checklist record of `project_type` with every task settled.
///
/// # Errors
///
/// Returns an error if a calendar date is invalid.
pub fn complete_record(project_type: ProjectType) -> eyre::Result<TaskRecord> {
    Ok(match project_type {
        ProjectType::Conversion => TaskRecord::from(complete_conversion()?),
        ProjectType::Transfer => TaskRecord::from(complete_transfer()?),
    })
}

const HANDOVER_DONE: HandoverTask = HandoverTask {
    not_applicable: false,
    review: true,
    notes: true,
    meeting: true,
};

const ARTICLES_DONE: ArticlesOfAssociationTask = ArticlesOfAssociationTask {
    not_applicable: false,
    received: true,
    cleared: true,
    signed: true,
    saved: true,
    sent: true,
};

const COMMERCIAL_AGREEMENT_DONE: CommercialTransferAgreementTask =
    CommercialTransferAgreementTask {
        agreed: true,
        signed: true,
        questions_received: true,
        questions_checked: true,
        saved: true,
    };

fn complete_conversion() -> eyre::Result<ConversionTasksData> {
    let date = significant_date()?;
    Ok(ConversionTasksData {
        handover: HANDOVER_DONE,
        stakeholder_kick_off: ConversionStakeholderKickOffTask {
            introductory_emails: true,
            local_authority_proforma: true,
            setup_meeting: true,
            meeting: true,
            check_provisional_conversion_date: true,
        },
        conversion_grant: ConversionGrantTask {
            not_applicable: true,
            ..ConversionGrantTask::default()
        },
        sponsored_support_grant: ConversionSponsoredSupportGrantTask {
            grant_type: Some(SponsoredSupportGrantType::FastTrack),
            payment_amount: true,
            payment_form: true,
            send_information: true,
            inform_trust: true,
            ..ConversionSponsoredSupportGrantTask::default()
        },
        academy_details: AcademyDetailsTask {
            name: Some("Riverside Academy".to_owned()),
        },
        proposed_capacity_of_the_academy: ProposedCapacityTask {
            not_applicable: true,
            ..ProposedCapacityTask::default()
        },
        land_questionnaire: LandQuestionnaireTask {
            received: true,
            cleared: true,
            signed: true,
            saved: true,
        },
        land_registry: LandRegistryTask {
            received: true,
            cleared: true,
            saved: true,
        },
        supplemental_funding_agreement: ConversionSupplementalFundingAgreementTask {
            received: true,
            cleared: true,
            signed: true,
            saved: true,
            sent: true,
            signed_secretary_state: true,
        },
        church_supplemental_agreement: ConversionChurchSupplementalAgreementTask {
            not_applicable: true,
            ..ConversionChurchSupplementalAgreementTask::default()
        },
        master_funding_agreement: ConversionMasterFundingAgreementTask {
            not_applicable: true,
            ..ConversionMasterFundingAgreementTask::default()
        },
        articles_of_association: ARTICLES_DONE,
        deed_of_variation: DeedOfVariationTask {
            not_applicable: true,
            ..DeedOfVariationTask::default()
        },
        trust_modification_order: TrustModificationOrderTask {
            not_applicable: true,
            ..TrustModificationOrderTask::default()
        },
        direction_to_transfer: DirectionToTransferTask {
            not_applicable: true,
            ..DirectionToTransferTask::default()
        },
        one_hundred_and_twenty_five_year_lease: OneHundredAndTwentyFiveYearLeaseTask {
            not_applicable: true,
            ..OneHundredAndTwentyFiveYearLeaseTask::default()
        },
        subleases: SubleasesTask {
            not_applicable: true,
            ..SubleasesTask::default()
        },
        tenancy_at_will: TenancyAtWillTask {
            not_applicable: true,
            ..TenancyAtWillTask::default()
        },
        commercial_transfer_agreement: COMMERCIAL_AGREEMENT_DONE,
        check_accuracy_of_higher_needs: CheckAccuracyOfHigherNeedsTask {
            confirm_number: true,
            confirm_published_number: true,
        },
        complete_notification_of_change: CompleteNotificationOfChangeTask {
            not_applicable: true,
            ..CompleteNotificationOfChangeTask::default()
        },
        share_information: ShareInformationTask { email: true },
        risk_protection_arrangement: RiskProtectionArrangementTask {
            option: Some(RiskProtectionArrangementOption::Standard),
            reason: None,
        },
        school_completed: SchoolCompletedTask {
            emailed: true,
            saved: true,
        },
        confirm_date_academy_opened: ConfirmDateAcademyOpenedTask {
            date_opened: Some(date),
        },
        redact_and_send: RedactAndSendTask {
            redact: true,
            save_redaction: true,
            send_redaction: true,
            send_solicitors: true,
        },
        receive_grant_payment_certificate: ReceiveGrantPaymentCertificateTask {
            date_received: Some(date),
            check_certificate: true,
            save_certificate: true,
            ..ReceiveGrantPaymentCertificateTask::default()
        },
        update_esfa: UpdateEsfaTask { update: true },
    })
}

fn complete_transfer() -> eyre::Result<TransferTasksData> {
    let date = significant_date()?;
    Ok(TransferTasksData {
        handover: HANDOVER_DONE,
        stakeholder_kick_off: TransferStakeholderKickOffTask {
            introductory_emails: true,
            setup_meeting: true,
            meeting: true,
        },
        rpa_policy: RpaPolicyTask { confirm: true },
        supplemental_funding_agreement: TransferSupplementalFundingAgreementTask {
            received: true,
            cleared: true,
            saved: true,
        },
        deed_of_novation_and_variation: DeedOfNovationAndVariationTask {
            received: true,
            cleared: true,
            signed_outgoing_trust: true,
            signed_incoming_trust: true,
            saved: true,
            signed_secretary_state: true,
            save_after_sign: true,
        },
        articles_of_association: ARTICLES_DONE,
        commercial_transfer_agreement: COMMERCIAL_AGREEMENT_DONE,
        church_supplemental_agreement: TransferChurchSupplementalAgreementTask {
            not_applicable: true,
            ..TransferChurchSupplementalAgreementTask::default()
        },
        deed_of_variation: DeedOfVariationTask {
            not_applicable: true,
            ..DeedOfVariationTask::default()
        },
        deed_of_termination_for_the_master_funding_agreement:
            DeedOfTerminationForTheMasterFundingAgreementTask {
                not_applicable: true,
                ..DeedOfTerminationForTheMasterFundingAgreementTask::default()
            },
        deed_termination_church_agreement: DeedTerminationChurchAgreementTask {
            not_applicable: true,
            ..DeedTerminationChurchAgreementTask::default()
        },
        land_consent_letter: LandConsentLetterTask {
            not_applicable: true,
            ..LandConsentLetterTask::default()
        },
        master_funding_agreement: TransferMasterFundingAgreementTask {
            not_applicable: true,
            ..TransferMasterFundingAgreementTask::default()
        },
        form_m: FormMTask {
            not_applicable: false,
            received_form_m: true,
            received_title_plans: true,
            cleared: true,
            signed: true,
            saved: true,
        },
        closure_or_transfer_declaration: ClosureOrTransferDeclarationTask {
            not_applicable: false,
            received: true,
            cleared: true,
            saved: true,
            sent: true,
        },
        sponsored_support_grant: TransferSponsoredSupportGrantTask {
            not_applicable: false,
            grant_type: Some(SponsoredSupportGrantType::Intermediate),
        },
        request_new_urn_and_record: RequestNewUrnAndRecordTask {
            not_applicable: true,
            ..RequestNewUrnAndRecordTask::default()
        },
        bank_details_changing: BankDetailsChangingTask {
            yes_no: Some(false),
        },
        check_and_confirm_financial_information: CheckAndConfirmFinancialInformationTask {
            not_applicable: false,
            academy_surplus_deficit: Some("surplus".to_owned()),
            trust_surplus_deficit: Some("deficit".to_owned()),
        },
        conditions_met: TransferConditionsMetTask {
            check_any_information_changed: true,
            baseline_sheet_approved: true,
        },
        confirm_incoming_trust_has_completed_all_actions: IncomingTrustCompletedTask {
            emailed: true,
            saved: true,
        },
        declaration_of_expenditure_certificate: DeclarationOfExpenditureCertificateTask {
            not_applicable: false,
            date_received: Some(date),
            correct: true,
            saved: true,
        },
        confirm_date_academy_transferred: ConfirmDateAcademyTransferredTask {
            date_transferred: Some(date),
        },
        redact_and_send_documents: RedactAndSendDocumentsTask {
            redact: true,
            saved: true,
            send_to_esfa: true,
            send_to_funding_team: true,
            send_to_solicitors: true,
        },
    })
}
