//! Response encoders used by the tests, built on `iso7816_tlv`

use iso7816_tlv::ber::{Tag, Tlv, Value};

use crate::constants::{OSE_VAS_AID, tags};

pub(crate) fn primitive(tag: &[u8], value: &[u8]) -> Tlv {
    Tlv::new(Tag::try_from(tag).unwrap(), Value::Primitive(value.to_vec())).unwrap()
}

pub(crate) fn constructed(tag: &[u8], children: Vec<Tlv>) -> Tlv {
    Tlv::new(Tag::try_from(tag).unwrap(), Value::Constructed(children)).unwrap()
}

/// Directory entry `61` with the ADF name first, followed by `fields`
pub(crate) fn directory_entry(aid: &[u8], fields: Vec<Tlv>) -> Tlv {
    let mut children = vec![primitive(tags::APPLICATION_ID, aid)];
    children.extend(fields);
    constructed(tags::DIRECTORY_ENTRY, children)
}

/// `OSE.VAS.01` entry carrying a discretionary template with `capabilities`
pub(crate) fn vas_entry(capabilities: u8) -> Tlv {
    directory_entry(
        OSE_VAS_AID,
        vec![
            primitive(tags::APPLICATION_LABEL, b"SmartTap"),
            primitive(tags::APPLICATION_PRIORITY, &[0x01]),
            constructed(
                tags::DISCRETIONARY_TEMPLATE,
                vec![
                    primitive(tags::MINIMUM_VERSION, &[0x00, 0x00]),
                    primitive(tags::MAXIMUM_VERSION, &[0x00, 0x01]),
                    primitive(tags::CAPABILITIES, &[capabilities]),
                ],
            ),
        ],
    )
}

/// `A5 { BF0C { ppse_children } }`
pub(crate) fn proprietary_template(ppse_children: Vec<Tlv>) -> Tlv {
    constructed(
        tags::FCI_PROPRIETARY_TEMPLATE,
        vec![constructed(tags::FCI_PPSE_DATA, ppse_children)],
    )
}

/// Mandatory outer fields of the FCI template, without the proprietary template
pub(crate) fn fci_header(transaction_details: u8) -> Vec<Tlv> {
    vec![
        primitive(tags::APPLICATION_LABEL, b"AndroidPay"),
        primitive(tags::APPLICATION_VERSION, &[0x00, 0x01]),
        primitive(tags::TRANSACTION_DETAILS, &[transaction_details]),
    ]
}

/// Full FCI template holding `entries`
pub(crate) fn fci_with_entries(transaction_details: u8, entries: Vec<Tlv>) -> Tlv {
    let mut children = fci_header(transaction_details);
    children.push(proprietary_template(entries));
    constructed(tags::FCI_TEMPLATE, children)
}

/// Encode `tlv` and append a status word
pub(crate) fn response(tlv: &Tlv, sw1: u8, sw2: u8) -> Vec<u8> {
    let mut raw = tlv.to_vec();
    raw.extend_from_slice(&[sw1, sw2]);
    raw
}
