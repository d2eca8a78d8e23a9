//! Checklist fields for transfer projects.

use super::{
    ArticlesOfAssociationTask, CommercialTransferAgreementTask, DeedOfVariationTask, HandoverTask,
    Requirements, SponsoredSupportGrantType, TaskStatus,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Complete checklist record for a transfer project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferTasksData {
    /// Handover with the regional delivery officer.
    pub handover: HandoverTask,
    /// External stakeholder kick-off.
    pub stakeholder_kick_off: TransferStakeholderKickOffTask,
    /// Risk protection arrangement policy.
    pub rpa_policy: RpaPolicyTask,
    /// Supplemental funding agreement.
    pub supplemental_funding_agreement: TransferSupplementalFundingAgreementTask,
    /// Deed of novation and variation.
    pub deed_of_novation_and_variation: DeedOfNovationAndVariationTask,
    /// Articles of association.
    pub articles_of_association: ArticlesOfAssociationTask,
    /// Commercial transfer agreement.
    pub commercial_transfer_agreement: CommercialTransferAgreementTask,
    /// Church supplemental agreement.
    pub church_supplemental_agreement: TransferChurchSupplementalAgreementTask,
    /// Deed of variation.
    pub deed_of_variation: DeedOfVariationTask,
    /// Deed of termination for the master funding agreement.
    pub deed_of_termination_for_the_master_funding_agreement: DeedOfTerminationForTheMasterFundingAgreementTask,
    /// Deed of termination for the church supplemental agreement.
    pub deed_termination_church_agreement: DeedTerminationChurchAgreementTask,
    /// Land consent letter.
    pub land_consent_letter: LandConsentLetterTask,
    /// Master funding agreement.
    pub master_funding_agreement: TransferMasterFundingAgreementTask,
    /// Form M.
    pub form_m: FormMTask,
    /// Closure or transfer declaration.
    pub closure_or_transfer_declaration: ClosureOrTransferDeclarationTask,
    /// Sponsored support grant.
    pub sponsored_support_grant: TransferSponsoredSupportGrantTask,
    /// New URN and record.
    pub request_new_urn_and_record: RequestNewUrnAndRecordTask,
    /// Bank details change.
    pub bank_details_changing: BankDetailsChangingTask,
    /// Academy and trust financial information.
    pub check_and_confirm_financial_information: CheckAndConfirmFinancialInformationTask,
    /// Conditions met.
    pub conditions_met: TransferConditionsMetTask,
    /// Incoming trust has completed all actions.
    pub confirm_incoming_trust_has_completed_all_actions: IncomingTrustCompletedTask,
    /// Declaration of expenditure certificate.
    pub declaration_of_expenditure_certificate: DeclarationOfExpenditureCertificateTask,
    /// Date the academy transferred.
    pub confirm_date_academy_transferred: ConfirmDateAcademyTransferredTask,
    /// Redact and send documents.
    pub redact_and_send_documents: RedactAndSendDocumentsTask,
}

/// External stakeholder kick-off for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferStakeholderKickOffTask {
    /// Introductory emails sent.
    pub introductory_emails: bool,
    /// Kick-off meeting set up.
    pub setup_meeting: bool,
    /// Kick-off meeting held.
    pub meeting: bool,
}

impl TransferStakeholderKickOffTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.introductory_emails)
                .step(self.setup_meeting)
                .step(self.meeting),
        )
    }
}

/// Risk protection arrangement policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpaPolicyTask {
    /// Policy confirmed.
    pub confirm: bool,
}

impl RpaPolicyTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(false, Requirements::new().step(self.confirm))
    }
}

/// Supplemental funding agreement for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSupplementalFundingAgreementTask {
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Saved.
    pub saved: bool,
}

impl TransferSupplementalFundingAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.saved),
        )
    }
}

/// Deed of novation and variation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeedOfNovationAndVariationTask {
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the outgoing trust.
    pub signed_outgoing_trust: bool,
    /// Signed by the incoming trust.
    pub signed_incoming_trust: bool,
    /// Saved.
    pub saved: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
    /// Saved after signing.
    pub save_after_sign: bool,
}

impl DeedOfNovationAndVariationTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed_outgoing_trust)
                .step(self.signed_incoming_trust)
                .step(self.saved)
                .step(self.signed_secretary_state)
                .step(self.save_after_sign),
        )
    }
}

/// Church supplemental agreement for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferChurchSupplementalAgreementTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the incoming trust.
    pub signed_incoming_trust: bool,
    /// Signed by the diocese.
    pub signed_diocese: bool,
    /// Saved after trust and diocese signatures.
    pub saved_after_signing_by_trust_diocese: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
    /// Saved after the Secretary of State signature.
    pub saved_after_signing_by_secretary_state: bool,
}

impl TransferChurchSupplementalAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed_incoming_trust)
                .step(self.signed_diocese)
                .step(self.saved_after_signing_by_trust_diocese)
                .step(self.signed_secretary_state)
                .step(self.saved_after_signing_by_secretary_state),
        )
    }
}

/// Deed of termination for the master funding agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeedOfTerminationForTheMasterFundingAgreementTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the outgoing trust.
    pub signed: bool,
    /// Saved in the academy and outgoing trust folders.
    pub saved_academy_and_outgoing_trust_sharepoint: bool,
    /// Financial reporting team contacted.
    pub contact_financial_reporting_team: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
    /// Saved in the academy folder.
    pub saved_in_academy_sharepoint_folder: bool,
}

impl DeedOfTerminationForTheMasterFundingAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved_academy_and_outgoing_trust_sharepoint)
                .step(self.contact_financial_reporting_team)
                .step(self.signed_secretary_state)
                .step(self.saved_in_academy_sharepoint_folder),
        )
    }
}

/// Deed of termination for the church supplemental agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeedTerminationChurchAgreementTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the outgoing trust.
    pub signed_outgoing_trust: bool,
    /// Signed by the diocese.
    pub signed_diocese: bool,
    /// Saved.
    pub saved: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
    /// Saved after the Secretary of State signature.
    pub saved_after_signing_by_secretary_state: bool,
}

impl DeedTerminationChurchAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed_outgoing_trust)
                .step(self.signed_diocese)
                .step(self.saved)
                .step(self.signed_secretary_state)
                .step(self.saved_after_signing_by_secretary_state),
        )
    }
}

/// Land consent letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandConsentLetterTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Drafted.
    pub drafted: bool,
    /// Signed.
    pub signed: bool,
    /// Sent.
    pub sent: bool,
    /// Saved.
    pub saved: bool,
}

impl LandConsentLetterTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.drafted)
                .step(self.signed)
                .step(self.sent)
                .step(self.saved),
        )
    }
}

/// Master funding agreement for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferMasterFundingAgreementTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the incoming trust.
    pub signed: bool,
    /// Saved.
    pub saved: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
}

impl TransferMasterFundingAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved)
                .step(self.signed_secretary_state),
        )
    }
}

/// Form M.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Form M received.
    pub received_form_m: bool,
    /// Title plans received.
    pub received_title_plans: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed.
    pub signed: bool,
    /// Saved.
    pub saved: bool,
}

impl FormMTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received_form_m)
                .step(self.received_title_plans)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved),
        )
    }
}

/// Closure or transfer declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureOrTransferDeclarationTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Saved.
    pub saved: bool,
    /// Sent to the funding team.
    pub sent: bool,
}

impl ClosureOrTransferDeclarationTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.saved)
                .step(self.sent),
        )
    }
}

/// Sponsored support grant for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSponsoredSupportGrantTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Grant type chosen.
    pub grant_type: Option<SponsoredSupportGrantType>,
}

impl TransferSponsoredSupportGrantTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new().value(&self.grant_type),
        )
    }
}

/// New URN and record for the academy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestNewUrnAndRecordTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Request completed.
    pub complete: bool,
    /// New URN received.
    pub receive: bool,
    /// New URN given to the trust.
    pub give: bool,
}

impl RequestNewUrnAndRecordTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.complete)
                .step(self.receive)
                .step(self.give),
        )
    }
}

/// Whether bank details for grant payments change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetailsChangingTask {
    /// The answer; either value completes the task.
    pub yes_no: Option<bool>,
}

impl BankDetailsChangingTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::reference(&self.yes_no)
    }
}

/// Academy and trust surplus or deficit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckAndConfirmFinancialInformationTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Academy surplus or deficit.
    pub academy_surplus_deficit: Option<String>,
    /// Trust surplus or deficit.
    pub trust_surplus_deficit: Option<String>,
}

impl CheckAndConfirmFinancialInformationTask {
    /// Returns the task status.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .text(self.academy_surplus_deficit.as_deref())
                .text(self.trust_surplus_deficit.as_deref()),
        )
    }
}

/// Conditions met for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConditionsMetTask {
    /// Checked whether any information changed.
    pub check_any_information_changed: bool,
    /// Baseline sheet approved.
    pub baseline_sheet_approved: bool,
}

impl TransferConditionsMetTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.check_any_information_changed)
                .step(self.baseline_sheet_approved),
        )
    }
}

/// Incoming trust has completed all actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomingTrustCompletedTask {
    /// Trust emailed.
    pub emailed: bool,
    /// Confirmation saved.
    pub saved: bool,
}

impl IncomingTrustCompletedTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new().step(self.emailed).step(self.saved),
        )
    }
}

/// Declaration of expenditure certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclarationOfExpenditureCertificateTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Date the certificate arrived.
    pub date_received: Option<NaiveDate>,
    /// Certificate correct.
    pub correct: bool,
    /// Certificate saved.
    pub saved: bool,
}

impl DeclarationOfExpenditureCertificateTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .value(&self.date_received)
                .step(self.correct)
                .step(self.saved),
        )
    }
}

/// Date the academy transferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmDateAcademyTransferredTask {
    /// Transfer date.
    pub date_transferred: Option<NaiveDate>,
}

impl ConfirmDateAcademyTransferredTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::reference(&self.date_transferred)
    }
}

/// Redact and send documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactAndSendDocumentsTask {
    /// Documents redacted.
    pub redact: bool,
    /// Redacted copies saved.
    pub saved: bool,
    /// Sent to ESFA.
    pub send_to_esfa: bool,
    /// Sent to the funding team.
    pub send_to_funding_team: bool,
    /// Sent to the solicitors.
    pub send_to_solicitors: bool,
}

impl RedactAndSendDocumentsTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.redact)
                .step(self.saved)
                .step(self.send_to_esfa)
                .step(self.send_to_funding_team)
                .step(self.send_to_solicitors),
        )
    }
}
