//! Task-completion validation engine.
//!
//! Each checklist task is a group of step flags and supporting fields whose
//! status is worked out by [`TaskStatus::evaluate`]. [`TaskList`] assembles
//! the ordered, applicability-filtered list for one project and
//! [`CompletionValidation`] turns that list and the significant date into
//! blocking reasons. Everything here is pure.

mod common;
mod completion;
mod conversion;
mod definition;
mod identifier;
mod record;
mod status;
mod task_list;
mod transfer;

pub use common::{
    ArticlesOfAssociationTask, CommercialTransferAgreementTask, DeedOfVariationTask, HandoverTask,
    SponsoredSupportGrantType,
};
pub use completion::{CompletionBlocker, CompletionValidation};
pub use conversion::{
    AcademyDetailsTask, CheckAccuracyOfHigherNeedsTask, CompleteNotificationOfChangeTask,
    ConfirmDateAcademyOpenedTask, ConversionChurchSupplementalAgreementTask, ConversionGrantTask,
    ConversionMasterFundingAgreementTask, ConversionSponsoredSupportGrantTask,
    ConversionStakeholderKickOffTask, ConversionSupplementalFundingAgreementTask,
    ConversionTasksData, DirectionToTransferTask, LandQuestionnaireTask, LandRegistryTask,
    OneHundredAndTwentyFiveYearLeaseTask, ProposedCapacityTask, ReceiveGrantPaymentCertificateTask,
    RedactAndSendTask, RiskProtectionArrangementOption, RiskProtectionArrangementTask,
    SchoolCompletedTask, ShareInformationTask, SubleasesTask, TenancyAtWillTask,
    TrustModificationOrderTask, UpdateEsfaTask,
};
pub use definition::Applicability;
pub use identifier::TaskIdentifier;
pub use record::TaskRecord;
pub use status::{Requirements, TaskStatus};
pub use task_list::{TaskList, TaskListEntry};
pub use transfer::{
    BankDetailsChangingTask, CheckAndConfirmFinancialInformationTask,
    ClosureOrTransferDeclarationTask, ConfirmDateAcademyTransferredTask,
    DeclarationOfExpenditureCertificateTask, DeedOfNovationAndVariationTask,
    DeedOfTerminationForTheMasterFundingAgreementTask, DeedTerminationChurchAgreementTask,
    FormMTask, IncomingTrustCompletedTask, LandConsentLetterTask, RedactAndSendDocumentsTask,
    RequestNewUrnAndRecordTask, RpaPolicyTask, TransferChurchSupplementalAgreementTask,
    TransferConditionsMetTask, TransferMasterFundingAgreementTask,
    TransferSponsoredSupportGrantTask, TransferStakeholderKickOffTask,
    TransferSupplementalFundingAgreementTask, TransferTasksData,
};
