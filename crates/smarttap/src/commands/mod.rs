mod select_ose;

pub use select_ose::SelectOseResponse;

use nexum_apdu_core::Command;

use crate::constants::{
    CLA_ISO7816, INS_SELECT, OSE_VAS_AID, P1_SELECT_BY_NAME, P2_FIRST_OCCURRENCE,
};

/// SELECT command for the `OSE.VAS.01` other system environment
pub fn select_ose_command() -> Command {
    Command::new_with_data(
        CLA_ISO7816,
        INS_SELECT,
        P1_SELECT_BY_NAME,
        P2_FIRST_OCCURRENCE,
        OSE_VAS_AID.to_vec(),
    )
    .with_le(0)
}
