use std::io::{ErrorKind, Read};

/// Fill `buf` from `reader`, stopping early only at end of input.
///
/// Returns the number of bytes read, so a short stream can be reported with
/// its actual length instead of a bare end-of-file.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use std::io::Cursor;
///
/// let mut buf = [0u8; 8];
/// let read = read_up_to(&mut Cursor::new([1, 2, 3]), &mut buf).unwrap();
/// assert_eq!(read, 3);
/// ```
///
/// # Errors
/// Returns any I/O error other than `Interrupted`.
pub fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::read_up_to;
    use std::io::{Cursor, Read};

    struct OneByteAtATime<R>(R);

    impl<R: Read> Read for OneByteAtATime<R> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let len = buf.len().min(1);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn read_up_to_fills_buffer() {
        let mut reader = Cursor::new([1u8, 2, 3, 4, 5]);
        let mut buf = [0u8; 4];
        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 4);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn read_up_to_stops_at_eof() {
        let mut reader = Cursor::new([9u8, 8]);
        let mut buf = [0u8; 4];
        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[9, 8]);
    }

    #[test]
    fn read_up_to_joins_short_reads() {
        let mut reader = OneByteAtATime(Cursor::new([1u8, 2, 3]));
        let mut buf = [0u8; 3];
        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 3);
        assert_eq!(buf, [1, 2, 3]);
    }
}
