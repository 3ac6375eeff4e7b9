use std::ffi::c_char;
use std::ffi::c_void;
use std::slice;
use std::sync::Arc;

use crate::{convert_panic_to_go_error, handle_go_error};
use nic_bindings_utils::encode_verdict;
use nic_decoder::Decoder;

/// # Safety
///
/// `input` must point to `input_size` readable bytes. `retsize`, `retcapacity` and
/// `error_out` must point to writable memory. `decoder_id` must come from `create_decoder`.
///
/// Thread Safety: This is safe to call simultaneously from multiple threads with the same
/// decoder.
/// Return value: the encoded verdict (see `encode_verdict`), to be released with `free_vec`.
/// On a panic, `null` is returned and `error_out` is set.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn validate_nic(
    decoder_id: i64,
    input: *const c_void,
    input_size: i64,
    retsize: *mut i64,
    retcapacity: *mut i64,
    error_out: *mut *const c_char,
) -> *const c_char {
    match convert_panic_to_go_error(|| {
        let decoder =
            std::mem::ManuallyDrop::new(unsafe { Arc::from_raw(decoder_id as *const Decoder) });

        let bytes = unsafe { read_input(input, input_size) };
        // Invalid UTF-8 is replaced rather than refused, the decoder rejects it anyway.
        let input = String::from_utf8_lossy(bytes);
        let verdict = decoder.validate(&input);

        let mut encoded = std::mem::ManuallyDrop::new(encode_verdict(&verdict));
        let len = encoded.len() as i64;
        let cap = encoded.capacity() as i64;

        unsafe {
            *retsize = len;
            *retcapacity = cap;
        };

        encoded.as_mut_ptr() as *const c_char
    }) {
        Ok(ptr) => ptr,
        Err(error) => {
            handle_go_error(error, Some(error_out));
            unsafe {
                *retsize = 0;
                *retcapacity = 0;
            }
            std::ptr::null::<c_char>()
        }
    }
}

/// # Safety
///
/// Same requirements as `validate_nic` for `decoder_id`, `input` and `input_size`.
///
/// Return value: whether the number is valid. A panic is reported as not valid.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn is_valid_nic(
    decoder_id: i64,
    input: *const c_void,
    input_size: i64,
) -> bool {
    convert_panic_to_go_error(|| {
        let decoder =
            std::mem::ManuallyDrop::new(unsafe { Arc::from_raw(decoder_id as *const Decoder) });
        let input = String::from_utf8_lossy(unsafe { read_input(input, input_size) });
        decoder.validate(&input).is_valid()
    })
    .unwrap_or(false)
}

/// # Safety
///
/// `input` must be null or point to `input_size` readable bytes that outlive `'a`.
unsafe fn read_input<'a>(input: *const c_void, input_size: i64) -> &'a [u8] {
    if input.is_null() || input_size <= 0 {
        return &[];
    }
    unsafe { slice::from_raw_parts(input.cast(), input_size as usize) }
}

#[unsafe(no_mangle)]
pub extern "C" fn free_vec(ptr: *const c_char, len: i64, cap: i64) {
    unsafe {
        // rust "owns" it again and will drop it leaving the scope
        drop(Vec::from_raw_parts(
            ptr as *mut c_char,
            len as usize,
            cap as usize,
        ));
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn free_string(ptr: *const c_char) {
    unsafe {
        drop(std::ffi::CString::from_raw(ptr as *mut c_char));
    }
}
