#![no_main]

use libfuzzer_sys::fuzz_target;
use mmcgen::{is_well_formed, reformat, XmlElement};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if !is_well_formed(text) {
        return;
    }
    // Anything the validator accepts must survive a reformat unchanged in structure
    if let (Ok(pretty), Ok(tree)) = (reformat(text), XmlElement::parse(text)) {
        assert!(is_well_formed(&pretty));
        if let Ok(again) = XmlElement::parse(&pretty) {
            assert_eq!(again.descendants().len(), tree.descendants().len());
        }
    }
});
