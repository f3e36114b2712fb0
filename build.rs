use std::mem;
use std::ptr;

trait Probe {
    fn probe(&self) -> u32;
}

impl Probe for u32 {
    fn probe(&self) -> u32 {
        *self
    }
}

/// Reads the first word of a (possibly fat) pointer.
fn leading_word<T: ?Sized>(fat: *const T) -> usize {
    unsafe { ptr::read(ptr::addr_of!(fat).cast::<usize>()) }
}

fn check(what: &str, ok: bool) {
    if !ok {
        panic!(
            concat!(
                "static-ptr rebinds pointer metadata to its inline buffer and assumes ",
                "the data address is the first word of a fat pointer; ",
                "this no longer holds for {}"
            ),
            what
        );
    }
}

fn main() {
    // The host layout may differ from the target layout, so this is a sanity
    // check rather than a proof.
    let value = 0x5eed_u32;
    let object: *const dyn Probe = &value;
    check(
        "trait objects",
        mem::size_of_val(&object) == 2 * mem::size_of::<usize>()
            && leading_word(object) == ptr::addr_of!(value) as usize,
    );
    check("trait objects", unsafe { (*object).probe() } == value);

    let array = [1u8, 2, 3];
    let slice: *const [u8] = &array;
    check(
        "slices",
        leading_word(slice) == array.as_ptr() as usize && unsafe { (&(*slice)).len() } == array.len(),
    );
}
