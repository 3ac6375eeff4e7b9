use std::ffi::c_char;
use std::sync::Arc;

use crate::{handle_go_error, handle_panic_ptr_return, read_json, GoError, ERR_INVALID_CONFIG};
use nic_decoder::{Decoder, DecoderConfig};

/// # Safety
///
/// `config_json` must be null or a valid cstr pointer. `error_out` must be null or point to
/// writable memory.
///
/// Return value: an id of the decoder to pass to the other functions, or a negative error
/// code. A null `config_json` creates a decoder with the default config.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn create_decoder(
    config_json: *const c_char,
    error_out: *mut *const c_char,
) -> i64 {
    handle_panic_ptr_return(Some(error_out), || {
        let config = if config_json.is_null() {
            DecoderConfig::default()
        } else {
            match unsafe { read_json::<DecoderConfig>(config_json) } {
                Ok(config) => config,
                Err(err) => {
                    handle_go_error(
                        GoError {
                            message: err.to_string(),
                        },
                        Some(error_out),
                    );
                    return ERR_INVALID_CONFIG;
                }
            }
        };

        // return a decoder id using the object address
        let decoder_address = Arc::into_raw(Arc::new(Decoder::new(&config)));
        decoder_address as usize as i64
    })
}
