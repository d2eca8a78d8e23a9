//! Ordered task definitions for each project shape.

use super::{ConversionTasksData, TaskIdentifier, TaskStatus, TransferTasksData};
use crate::project::domain::{KeyContactRole, KeyContacts, Project};
use serde::{Deserialize, Serialize};

/// Condition a project must meet for a task to appear in its checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    /// Every project of the shape.
    Always,
    /// Conversions without a directive academy order.
    VoluntaryConversion,
    /// Conversions driven by a directive academy order.
    SponsoredConversion,
    /// Projects joining a trust that already exists.
    ExistingIncomingTrust,
}

impl Applicability {
    /// Returns `true` when a task with this applicability belongs in the
    /// project's checklist.
    #[must_use]
    pub const fn applies(self, project: &Project) -> bool {
        match self {
            Self::Always => true,
            Self::VoluntaryConversion => !project.directive_academy_order(),
            Self::SponsoredConversion => project.directive_academy_order(),
            Self::ExistingIncomingTrust => !project.form_a_mat(),
        }
    }
}

/// Project-level inputs some tasks read instead of the checklist record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TaskContext<'a> {
    pub project: &'a Project,
    pub key_contacts: &'a KeyContacts,
}

impl TaskContext<'_> {
    const fn contact_status(&self, role: KeyContactRole) -> TaskStatus {
        TaskStatus::reference(&self.key_contacts.contact(role))
    }

    const fn main_contact_status(&self) -> TaskStatus {
        TaskStatus::reference(&self.project.main_contact_id())
    }
}

pub(crate) struct TaskDefinition<T> {
    pub identifier: TaskIdentifier,
    pub applicability: Applicability,
    pub status: fn(&T, &TaskContext<'_>) -> TaskStatus,
}

pub(crate) const CONVERSION_TASKS: &[TaskDefinition<ConversionTasksData>] = &[
    TaskDefinition {
        identifier: TaskIdentifier::Handover,
        applicability: Applicability::Always,
        status: |data, _| data.handover.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::StakeholderKickOff,
        applicability: Applicability::Always,
        status: |data, _| data.stakeholder_kick_off.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConversionGrant,
        applicability: Applicability::VoluntaryConversion,
        status: |data, _| data.conversion_grant.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::SponsoredSupportGrant,
        applicability: Applicability::SponsoredConversion,
        status: |data, _| data.sponsored_support_grant.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::AcademyDetails,
        applicability: Applicability::Always,
        status: |data, _| data.academy_details.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmHeadteacherDetails,
        applicability: Applicability::Always,
        status: |_, context| context.contact_status(KeyContactRole::Headteacher),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmChairOfGovernorsDetails,
        applicability: Applicability::Always,
        status: |_, context| context.contact_status(KeyContactRole::ChairOfGovernors),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmIncomingTrustCeoDetails,
        applicability: Applicability::ExistingIncomingTrust,
        status: |_, context| context.contact_status(KeyContactRole::IncomingTrustCeo),
    },
    TaskDefinition {
        identifier: TaskIdentifier::MainContact,
        applicability: Applicability::Always,
        status: |_, context| context.main_contact_status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ProposedCapacityOfTheAcademy,
        applicability: Applicability::Always,
        status: |data, _| data.proposed_capacity_of_the_academy.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::LandQuestionnaire,
        applicability: Applicability::Always,
        status: |data, _| data.land_questionnaire.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::LandRegistry,
        applicability: Applicability::Always,
        status: |data, _| data.land_registry.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::SupplementalFundingAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.supplemental_funding_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ChurchSupplementalAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.church_supplemental_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::MasterFundingAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.master_funding_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ArticlesOfAssociation,
        applicability: Applicability::Always,
        status: |data, _| data.articles_of_association.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::DeedOfVariation,
        applicability: Applicability::Always,
        status: |data, _| data.deed_of_variation.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::TrustModificationOrder,
        applicability: Applicability::Always,
        status: |data, _| data.trust_modification_order.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::DirectionToTransfer,
        applicability: Applicability::Always,
        status: |data, _| data.direction_to_transfer.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::OneHundredAndTwentyFiveYearLease,
        applicability: Applicability::Always,
        status: |data, _| data.one_hundred_and_twenty_five_year_lease.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::Subleases,
        applicability: Applicability::Always,
        status: |data, _| data.subleases.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::TenancyAtWill,
        applicability: Applicability::Always,
        status: |data, _| data.tenancy_at_will.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::CommercialTransferAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.commercial_transfer_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::CheckAccuracyOfHigherNeeds,
        applicability: Applicability::Always,
        status: |data, _| data.check_accuracy_of_higher_needs.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::CompleteNotificationOfChange,
        applicability: Applicability::Always,
        status: |data, _| data.complete_notification_of_change.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConditionsMet,
        applicability: Applicability::Always,
        status: |_, context| {
            TaskStatus::reference(&context.project.all_conditions_met().filter(|met| *met))
        },
    },
    TaskDefinition {
        identifier: TaskIdentifier::ShareInformation,
        applicability: Applicability::Always,
        status: |data, _| data.share_information.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::RiskProtectionArrangement,
        applicability: Applicability::Always,
        status: |data, _| data.risk_protection_arrangement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmSchoolHasCompletedAllActions,
        applicability: Applicability::Always,
        status: |data, _| data.school_completed.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmDateAcademyOpened,
        applicability: Applicability::Always,
        status: |data, _| data.confirm_date_academy_opened.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::RedactAndSend,
        applicability: Applicability::Always,
        status: |data, _| data.redact_and_send.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ReceiveGrantPaymentCertificate,
        applicability: Applicability::Always,
        status: |data, _| data.receive_grant_payment_certificate.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::UpdateEsfa,
        applicability: Applicability::Always,
        status: |data, _| data.update_esfa.status(),
    },
];

pub(crate) const TRANSFER_TASKS: &[TaskDefinition<TransferTasksData>] = &[
    TaskDefinition {
        identifier: TaskIdentifier::Handover,
        applicability: Applicability::Always,
        status: |data, _| data.handover.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::StakeholderKickOff,
        applicability: Applicability::Always,
        status: |data, _| data.stakeholder_kick_off.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::RpaPolicy,
        applicability: Applicability::Always,
        status: |data, _| data.rpa_policy.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::SupplementalFundingAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.supplemental_funding_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::DeedOfNovationAndVariation,
        applicability: Applicability::Always,
        status: |data, _| data.deed_of_novation_and_variation.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ArticlesOfAssociation,
        applicability: Applicability::Always,
        status: |data, _| data.articles_of_association.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::CommercialTransferAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.commercial_transfer_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ChurchSupplementalAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.church_supplemental_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::DeedOfVariation,
        applicability: Applicability::Always,
        status: |data, _| data.deed_of_variation.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::DeedOfTerminationForTheMasterFundingAgreement,
        applicability: Applicability::Always,
        status: |data, _| {
            data.deed_of_termination_for_the_master_funding_agreement
                .status()
        },
    },
    TaskDefinition {
        identifier: TaskIdentifier::DeedTerminationChurchAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.deed_termination_church_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::LandConsentLetter,
        applicability: Applicability::Always,
        status: |data, _| data.land_consent_letter.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::MasterFundingAgreement,
        applicability: Applicability::Always,
        status: |data, _| data.master_funding_agreement.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::FormM,
        applicability: Applicability::Always,
        status: |data, _| data.form_m.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ClosureOrTransferDeclaration,
        applicability: Applicability::Always,
        status: |data, _| data.closure_or_transfer_declaration.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::SponsoredSupportGrant,
        applicability: Applicability::Always,
        status: |data, _| data.sponsored_support_grant.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmHeadteacherDetails,
        applicability: Applicability::Always,
        status: |_, context| context.contact_status(KeyContactRole::Headteacher),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmIncomingTrustCeoDetails,
        applicability: Applicability::ExistingIncomingTrust,
        status: |_, context| context.contact_status(KeyContactRole::IncomingTrustCeo),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmOutgoingTrustCeoDetails,
        applicability: Applicability::Always,
        status: |_, context| context.contact_status(KeyContactRole::OutgoingTrustCeo),
    },
    TaskDefinition {
        identifier: TaskIdentifier::MainContact,
        applicability: Applicability::Always,
        status: |_, context| context.main_contact_status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::RequestNewUrnAndRecord,
        applicability: Applicability::Always,
        status: |data, _| data.request_new_urn_and_record.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::BankDetailsChanging,
        applicability: Applicability::Always,
        status: |data, _| data.bank_details_changing.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::CheckAndConfirmFinancialInformation,
        applicability: Applicability::Always,
        status: |data, _| data.check_and_confirm_financial_information.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConditionsMet,
        applicability: Applicability::Always,
        status: |data, _| data.conditions_met.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmIncomingTrustHasCompletedAllActions,
        applicability: Applicability::Always,
        status: |data, _| {
            data.confirm_incoming_trust_has_completed_all_actions
                .status()
        },
    },
    TaskDefinition {
        identifier: TaskIdentifier::DeclarationOfExpenditureCertificate,
        applicability: Applicability::Always,
        status: |data, _| data.declaration_of_expenditure_certificate.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::ConfirmDateAcademyTransferred,
        applicability: Applicability::Always,
        status: |data, _| data.confirm_date_academy_transferred.status(),
    },
    TaskDefinition {
        identifier: TaskIdentifier::RedactAndSendDocuments,
        applicability: Applicability::Always,
        status: |data, _| data.redact_and_send_documents.status(),
    },
];
