//! Stable identifiers and display labels for checklist tasks.

use crate::project::domain::ParseProjectValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! task_identifiers {
    ($($variant:ident => $key:literal, $label:literal;)+) => {
        /// Identifier of a checklist task, shared by notes and task lists.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum TaskIdentifier {
            $(
                #[doc = $label]
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl TaskIdentifier {
            /// Every task identifier, conversion tasks first.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical storage representation.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Returns the label shown to caseworkers.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl TryFrom<&str> for TaskIdentifier {
            type Error = ParseProjectValueError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value.trim() {
                    $($key => Ok(Self::$variant),)+
                    _ => Err(ParseProjectValueError::new("task identifier", value)),
                }
            }
        }
    };
}

task_identifiers! {
    Handover => "handover", "Handover with regional delivery officer";
    StakeholderKickOff => "stakeholder_kick_off", "External stakeholder kick-off";
    ConversionGrant => "conversion_grant", "Conversion grant";
    SponsoredSupportGrant => "sponsored_support_grant", "Confirm and process the sponsored support grant";
    AcademyDetails => "academy_details", "Confirm the academy name";
    ConfirmHeadteacherDetails => "confirm_headteacher_details", "Confirm the headteacher's details";
    ConfirmChairOfGovernorsDetails => "confirm_chair_of_governors_details", "Confirm the chair of governors' details";
    ConfirmIncomingTrustCeoDetails => "confirm_incoming_trust_ceo_details", "Confirm the incoming trust CEO's details";
    MainContact => "main_contact", "Confirm the main contact";
    ProposedCapacityOfTheAcademy => "proposed_capacity_of_the_academy", "Confirm the proposed capacity of the academy";
    LandQuestionnaire => "land_questionnaire", "Land questionnaire";
    LandRegistry => "land_registry", "Land registry title plans";
    SupplementalFundingAgreement => "supplemental_funding_agreement", "Supplemental funding agreement";
    ChurchSupplementalAgreement => "church_supplemental_agreement", "Church supplemental agreement";
    MasterFundingAgreement => "master_funding_agreement", "Master funding agreement";
    ArticlesOfAssociation => "articles_of_association", "Articles of association";
    DeedOfVariation => "deed_of_variation", "Deed of variation";
    TrustModificationOrder => "trust_modification_order", "Trust modification order";
    DirectionToTransfer => "direction_to_transfer", "Direction to transfer";
    OneHundredAndTwentyFiveYearLease => "one_hundred_and_twenty_five_year_lease", "125 year lease";
    Subleases => "subleases", "Subleases";
    TenancyAtWill => "tenancy_at_will", "Tenancy at will";
    CommercialTransferAgreement => "commercial_transfer_agreement", "Commercial transfer agreement";
    CheckAccuracyOfHigherNeeds => "check_accuracy_of_higher_needs", "Check accuracy of high needs places information";
    CompleteNotificationOfChange => "complete_notification_of_change", "Complete a notification of changes to funded high needs places form";
    ConditionsMet => "conditions_met", "Confirm all conditions have been met";
    ShareInformation => "share_information", "Share the information about opening";
    RiskProtectionArrangement => "risk_protection_arrangement", "Confirm the academy's risk protection arrangements";
    ConfirmSchoolHasCompletedAllActions => "school_completed", "Confirm the school has completed all actions";
    ConfirmDateAcademyOpened => "confirm_date_academy_opened", "Confirm the date the academy opened";
    RedactAndSend => "redact_and_send", "Redact and send documents";
    ReceiveGrantPaymentCertificate => "receive_grant_payment_certificate", "Receive grant payment certificate";
    UpdateEsfa => "update_esfa", "Update ESFA";
    RpaPolicy => "rpa_policy", "Confirm the academy's risk protection arrangement policy";
    DeedOfNovationAndVariation => "deed_of_novation_and_variation", "Deed of novation and variation";
    DeedOfTerminationForTheMasterFundingAgreement => "deed_of_termination_for_the_master_funding_agreement", "Deed of termination for the master funding agreement";
    DeedTerminationChurchAgreement => "deed_termination_church_agreement", "Deed of termination for the church supplemental agreement";
    LandConsentLetter => "land_consent_letter", "Land consent letter";
    FormM => "form_m", "Form M";
    ClosureOrTransferDeclaration => "closure_or_transfer_declaration", "Closure or transfer declaration";
    ConfirmOutgoingTrustCeoDetails => "confirm_outgoing_trust_ceo_details", "Confirm the outgoing trust CEO's details";
    RequestNewUrnAndRecord => "request_new_urn_and_record", "Request a new URN and record for the academy";
    BankDetailsChanging => "bank_details_changing", "Confirm if the bank details for the general annual grant payment need to change";
    CheckAndConfirmFinancialInformation => "check_and_confirm_financial_information", "Check and confirm academy and trust financial information";
    ConfirmIncomingTrustHasCompletedAllActions => "confirm_incoming_trust_has_completed_all_actions", "Confirm the incoming trust has completed all actions";
    DeclarationOfExpenditureCertificate => "declaration_of_expenditure_certificate", "Receive declaration of expenditure certificate";
    ConfirmDateAcademyTransferred => "confirm_date_academy_transferred", "Confirm the date the academy transferred";
    RedactAndSendDocuments => "redact_and_send_documents", "Redact and send documents";
}

impl fmt::Display for TaskIdentifier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
