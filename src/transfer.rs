use crate::ops::Ops;

/// Moves the object held by the source buffer into the destination buffer.
///
/// The source always ends up empty. Objects of the same concrete type are
/// moved with `move_assign`, reusing the destination storage; otherwise the
/// destination object is destructed first and the source object is
/// move-constructed in its place.
///
/// Ops references are cleared before the call that ends an object's life, so a
/// panicking destructor never leaves a record pointing at a dead object.
///
/// # Safety
///
/// - Each buffer holds a live object described by its record, or nothing if the
///   record is `None`.
/// - The destination buffer is large and aligned enough for the source object.
/// - The buffers do not overlap.
pub(crate) unsafe fn transfer(
    dst_buf: *mut u8,
    dst_ops: &mut Option<&'static Ops>,
    src_buf: *mut u8,
    src_ops: &mut Option<&'static Ops>,
) {
    match (*dst_ops, *src_ops) {
        (None, None) => {}
        (Some(dst), Some(src)) if dst.same_type(src) => {
            *src_ops = None;
            (src.move_assign)(dst_buf, src_buf);
        }
        (dst, src) => {
            if let Some(dst) = dst {
                *dst_ops = None;
                (dst.destruct)(dst_buf);
            }
            if let Some(src) = src {
                *src_ops = None;
                (src.move_construct)(dst_buf, src_buf);
                *dst_ops = Some(src);
            }
        }
    }
}
