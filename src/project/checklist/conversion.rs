//! Checklist fields for conversion projects.
//!
//! One struct per task group. Fields default to unset so that a freshly
//! created record deserializes from `{}`.

use super::{
    ArticlesOfAssociationTask, CommercialTransferAgreementTask, DeedOfVariationTask, HandoverTask,
    Requirements, SponsoredSupportGrantType, TaskStatus,
};
use crate::project::domain::ParseProjectValueError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Complete checklist record for a conversion project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionTasksData {
    /// Handover with the regional delivery officer.
    pub handover: HandoverTask,
    /// External stakeholder kick-off.
    pub stakeholder_kick_off: ConversionStakeholderKickOffTask,
    /// Conversion grant for voluntary conversions.
    pub conversion_grant: ConversionGrantTask,
    /// Sponsored support grant for sponsored conversions.
    pub sponsored_support_grant: ConversionSponsoredSupportGrantTask,
    /// Academy name.
    pub academy_details: AcademyDetailsTask,
    /// Proposed pupil capacity.
    pub proposed_capacity_of_the_academy: ProposedCapacityTask,
    /// Land questionnaire.
    pub land_questionnaire: LandQuestionnaireTask,
    /// Land registry title plans.
    pub land_registry: LandRegistryTask,
    /// Supplemental funding agreement.
    pub supplemental_funding_agreement: ConversionSupplementalFundingAgreementTask,
    /// Church supplemental agreement.
    pub church_supplemental_agreement: ConversionChurchSupplementalAgreementTask,
    /// Master funding agreement.
    pub master_funding_agreement: ConversionMasterFundingAgreementTask,
    /// Articles of association.
    pub articles_of_association: ArticlesOfAssociationTask,
    /// Deed of variation.
    pub deed_of_variation: DeedOfVariationTask,
    /// Trust modification order.
    pub trust_modification_order: TrustModificationOrderTask,
    /// Direction to transfer.
    pub direction_to_transfer: DirectionToTransferTask,
    /// 125 year lease.
    pub one_hundred_and_twenty_five_year_lease: OneHundredAndTwentyFiveYearLeaseTask,
    /// Subleases.
    pub subleases: SubleasesTask,
    /// Tenancy at will.
    pub tenancy_at_will: TenancyAtWillTask,
    /// Commercial transfer agreement.
    pub commercial_transfer_agreement: CommercialTransferAgreementTask,
    /// High needs places check.
    pub check_accuracy_of_higher_needs: CheckAccuracyOfHigherNeedsTask,
    /// Notification of changes to high needs places.
    pub complete_notification_of_change: CompleteNotificationOfChangeTask,
    /// Opening information shared.
    pub share_information: ShareInformationTask,
    /// Risk protection arrangement.
    pub risk_protection_arrangement: RiskProtectionArrangementTask,
    /// School has completed all actions.
    pub school_completed: SchoolCompletedTask,
    /// Academy opening date.
    pub confirm_date_academy_opened: ConfirmDateAcademyOpenedTask,
    /// Redact and send documents.
    pub redact_and_send: RedactAndSendTask,
    /// Grant payment certificate.
    pub receive_grant_payment_certificate: ReceiveGrantPaymentCertificateTask,
    /// ESFA update.
    pub update_esfa: UpdateEsfaTask,
}

/// External stakeholder kick-off for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionStakeholderKickOffTask {
    /// Introductory emails sent.
    pub introductory_emails: bool,
    /// Local authority proforma received.
    pub local_authority_proforma: bool,
    /// Kick-off meeting set up.
    pub setup_meeting: bool,
    /// Kick-off meeting held.
    pub meeting: bool,
    /// Provisional conversion date checked.
    pub check_provisional_conversion_date: bool,
}

impl ConversionStakeholderKickOffTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.introductory_emails)
                .step(self.local_authority_proforma)
                .step(self.setup_meeting)
                .step(self.meeting)
                .step(self.check_provisional_conversion_date),
        )
    }
}

/// Conversion grant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionGrantTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Vendor account checked.
    pub check_vendor_account: bool,
    /// Payment form completed.
    pub payment_form: bool,
    /// Information sent to the school.
    pub send_information: bool,
    /// Payment date shared.
    pub share_payment_date: bool,
}

impl ConversionGrantTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.check_vendor_account)
                .step(self.payment_form)
                .step(self.send_information)
                .step(self.share_payment_date),
        )
    }
}

/// Sponsored support grant for a sponsored conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSponsoredSupportGrantTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Grant type chosen.
    pub grant_type: Option<SponsoredSupportGrantType>,
    /// Payment amount confirmed.
    pub payment_amount: bool,
    /// Payment form completed.
    pub payment_form: bool,
    /// Information sent to the trust.
    pub send_information: bool,
    /// Trust informed of the payment.
    pub inform_trust: bool,
}

impl ConversionSponsoredSupportGrantTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .value(&self.grant_type)
                .step(self.payment_amount)
                .step(self.payment_form)
                .step(self.send_information)
                .step(self.inform_trust),
        )
    }
}

/// Academy name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademyDetailsTask {
    /// Name the academy will open under.
    pub name: Option<String>,
}

impl AcademyDetailsTask {
    /// Returns the task status.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(false, Requirements::new().text(self.name.as_deref()))
    }
}

/// Proposed capacity by age band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposedCapacityTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Places for reception to year 6.
    pub reception_to_six_years: Option<String>,
    /// Places for years 7 to 11.
    pub seven_to_eleven_years: Option<String>,
    /// Places for year 12 and above.
    pub twelve_or_above_years: Option<String>,
}

impl ProposedCapacityTask {
    /// Returns the task status.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .text(self.reception_to_six_years.as_deref())
                .text(self.seven_to_eleven_years.as_deref())
                .text(self.twelve_or_above_years.as_deref()),
        )
    }
}

/// Land questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandQuestionnaireTask {
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed.
    pub signed: bool,
    /// Saved.
    pub saved: bool,
}

impl LandQuestionnaireTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved),
        )
    }
}

/// Land registry title plans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandRegistryTask {
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Saved.
    pub saved: bool,
}

impl LandRegistryTask {
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

/// Supplemental funding agreement for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSupplementalFundingAgreementTask {
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the trust.
    pub signed: bool,
    /// Saved.
    pub saved: bool,
    /// Sent to the Secretary of State.
    pub sent: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
}

impl ConversionSupplementalFundingAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved)
                .step(self.sent)
                .step(self.signed_secretary_state),
        )
    }
}

/// Church supplemental agreement for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionChurchSupplementalAgreementTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the trust.
    pub signed: bool,
    /// Signed by the diocese.
    pub signed_diocese: bool,
    /// Saved.
    pub saved: bool,
    /// Sent to the Secretary of State.
    pub sent: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
}

impl ConversionChurchSupplementalAgreementTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.signed_diocese)
                .step(self.saved)
                .step(self.sent)
                .step(self.signed_secretary_state),
        )
    }
}

/// Master funding agreement for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionMasterFundingAgreementTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed by the trust.
    pub signed: bool,
    /// Saved.
    pub saved: bool,
    /// Sent to the Secretary of State.
    pub sent: bool,
    /// Signed by the Secretary of State.
    pub signed_secretary_state: bool,
}

impl ConversionMasterFundingAgreementTask {
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
                .step(self.sent)
                .step(self.signed_secretary_state),
        )
    }
}

/// Trust modification order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustModificationOrderTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Sent to the legal team.
    pub sent_legal: bool,
    /// Cleared.
    pub cleared: bool,
    /// Saved.
    pub saved: bool,
}

impl TrustModificationOrderTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.sent_legal)
                .step(self.cleared)
                .step(self.saved),
        )
    }
}

/// Direction to transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionToTransferTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed.
    pub signed: bool,
    /// Saved.
    pub saved: bool,
}

impl DirectionToTransferTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.received)
                .step(self.cleared)
                .step(self.signed)
                .step(self.saved),
        )
    }
}

/// 125 year lease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OneHundredAndTwentyFiveYearLeaseTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Lease requested by email.
    pub email: bool,
    /// Lease received.
    pub receive: bool,
    /// Lease saved.
    pub save_lease: bool,
}

impl OneHundredAndTwentyFiveYearLeaseTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.email)
                .step(self.receive)
                .step(self.save_lease),
        )
    }
}

/// Subleases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubleasesTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Received.
    pub received: bool,
    /// Cleared.
    pub cleared: bool,
    /// Signed.
    pub signed: bool,
    /// Saved.
    pub saved: bool,
    /// Signed copies requested by email.
    pub email_signed: bool,
    /// Signed copies received.
    pub receive_signed: bool,
    /// Signed copies saved.
    pub save_signed: bool,
}

impl SubleasesTask {
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
                .step(self.email_signed)
                .step(self.receive_signed)
                .step(self.save_signed),
        )
    }
}

/// Tenancy at will.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenancyAtWillTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Signed copy requested by email.
    pub email_signed: bool,
    /// Signed copy received.
    pub receive_signed: bool,
    /// Signed copy saved.
    pub save_signed: bool,
}

impl TenancyAtWillTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.email_signed)
                .step(self.receive_signed)
                .step(self.save_signed),
        )
    }
}

/// High needs places check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckAccuracyOfHigherNeedsTask {
    /// Number of places confirmed with the school.
    pub confirm_number: bool,
    /// Published number of places confirmed.
    pub confirm_published_number: bool,
}

impl CheckAccuracyOfHigherNeedsTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.confirm_number)
                .step(self.confirm_published_number),
        )
    }
}

/// Notification of changes to funded high needs places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleteNotificationOfChangeTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Local authority told.
    pub tell_local_authority: bool,
    /// Form checked.
    pub check_document: bool,
    /// Form sent.
    pub send_document: bool,
}

impl CompleteNotificationOfChangeTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .step(self.tell_local_authority)
                .step(self.check_document)
                .step(self.send_document),
        )
    }
}

/// Opening information shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareInformationTask {
    /// Information emailed.
    pub email: bool,
}

impl ShareInformationTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(false, Requirements::new().step(self.email))
    }
}

/// Risk protection arrangement the academy will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProtectionArrangementOption {
    /// The standard arrangement.
    Standard,
    /// Church or trust arrangement.
    ChurchOrTrust,
    /// Commercial insurance; needs a reason.
    Commercial,
}

impl RiskProtectionArrangementOption {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::ChurchOrTrust => "church_or_trust",
            Self::Commercial => "commercial",
        }
    }
}

impl TryFrom<&str> for RiskProtectionArrangementOption {
    type Error = ParseProjectValueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "standard" => Ok(Self::Standard),
            "church_or_trust" => Ok(Self::ChurchOrTrust),
            "commercial" => Ok(Self::Commercial),
            _ => Err(ParseProjectValueError::new(
                "risk protection arrangement",
                value,
            )),
        }
    }
}

/// Risk protection arrangement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskProtectionArrangementTask {
    /// Chosen arrangement.
    pub option: Option<RiskProtectionArrangementOption>,
    /// Reason for commercial insurance.
    pub reason: Option<String>,
}

impl RiskProtectionArrangementTask {
    /// Returns the task status.
    ///
    /// The reason only counts when commercial insurance was chosen.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        let commercial = self.option == Some(RiskProtectionArrangementOption::Commercial);
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .value(&self.option)
                .when(commercial, |tally| tally.text(self.reason.as_deref())),
        )
    }
}

/// School has completed all actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolCompletedTask {
    /// School emailed.
    pub emailed: bool,
    /// Confirmation saved.
    pub saved: bool,
}

impl SchoolCompletedTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new().step(self.emailed).step(self.saved),
        )
    }
}

/// Date the academy opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmDateAcademyOpenedTask {
    /// Opening date.
    pub date_opened: Option<NaiveDate>,
}

impl ConfirmDateAcademyOpenedTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::reference(&self.date_opened)
    }
}

/// Redact and send documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactAndSendTask {
    /// Documents redacted.
    pub redact: bool,
    /// Redacted copies saved.
    pub save_redaction: bool,
    /// Redacted copies sent.
    pub send_redaction: bool,
    /// Solicitors sent the documents.
    pub send_solicitors: bool,
}

impl RedactAndSendTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            false,
            Requirements::new()
                .step(self.redact)
                .step(self.save_redaction)
                .step(self.send_redaction)
                .step(self.send_solicitors),
        )
    }
}

/// Grant payment certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiveGrantPaymentCertificateTask {
    /// Not applicable.
    pub not_applicable: bool,
    /// Date the certificate arrived.
    pub date_received: Option<NaiveDate>,
    /// Certificate checked.
    pub check_certificate: bool,
    /// Certificate saved.
    pub save_certificate: bool,
}

impl ReceiveGrantPaymentCertificateTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(
            self.not_applicable,
            Requirements::new()
                .value(&self.date_received)
                .step(self.check_certificate)
                .step(self.save_certificate),
        )
    }
}

/// ESFA update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateEsfaTask {
    /// ESFA updated.
    pub update: bool,
}

impl UpdateEsfaTask {
    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        TaskStatus::evaluate(false, Requirements::new().step(self.update))
    }
}
