use crate::convert_panic_to_go_error;
use nic_decoder::Decoder;
use std::sync::Arc;

#[unsafe(no_mangle)]
pub unsafe extern "C" fn delete_decoder(decoder_id: i64) {
    let _ = convert_panic_to_go_error(|| {
        let decoder = unsafe { Arc::from_raw(decoder_id as *mut Decoder) };
        drop(decoder);
    });
}
