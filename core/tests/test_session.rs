#[cfg(test)]
mod session_tests {
    use std::thread;

    use zstream_core::constants::{level, status};
    use zstream_core::session::{
        deflate, deflate_end, inflate, inflate_end, inflate_reset, initialize_deflate,
        initialize_deflate_with, initialize_inflate, initialize_inflate_with, Allocator,
        StreamHandle,
    };
    use zstream_core::types::{Flush, StreamFormat, StreamMode};

    fn deflate_all(data: &[u8]) -> Vec<u8> {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_deflate(&mut h), status::Z_OK);
        h.set_input(data);
        let mut out = Vec::with_capacity(data.len() + 64);
        assert_eq!(deflate(&mut h, &mut out, Flush::Finish), status::Z_STREAM_END);
        assert_eq!(deflate_end(&mut h), status::Z_OK);
        out
    }

    fn inflate_all(data: &[u8], expected_len: usize) -> Vec<u8> {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_inflate(&mut h), status::Z_OK);
        h.set_input(data);
        let mut out = Vec::with_capacity(expected_len + 64);
        assert_eq!(inflate(&mut h, &mut out, Flush::None), status::Z_STREAM_END);
        assert_eq!(inflate_end(&mut h), status::Z_OK);
        out
    }

    #[test]
    fn deflate_init_on_fresh_handle_is_ready() {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_deflate(&mut h), status::Z_OK);
        assert_eq!(h.allocator(), Allocator::PlatformDefault);
        assert_eq!(h.mode(), Some(StreamMode::Deflate));

        // Ready handle accepts a compress call on empty input.
        let mut out = Vec::with_capacity(64);
        assert_eq!(deflate(&mut h, &mut out, Flush::Finish), status::Z_STREAM_END);
        assert!(!out.is_empty(), "empty zlib stream still has header and trailer");
    }

    #[test]
    fn inflate_init_on_fresh_handle_clears_cursor() {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_inflate(&mut h), status::Z_OK);
        assert_eq!(h.avail_in(), 0);
        assert!(h.next_in().is_none(), "next_in must be null after inflate init");
        assert_eq!(h.mode(), Some(StreamMode::Inflate));
    }

    #[test]
    fn double_init_is_not_guarded() {
        // Re-initializing an active handle is a caller error. The initializer
        // does not reject it; the previous session is simply discarded.
        let mut h = StreamHandle::default();
        assert_eq!(initialize_deflate(&mut h), status::Z_OK);
        h.set_input(b"partial");
        let mut out = Vec::with_capacity(64);
        assert_eq!(deflate(&mut h, &mut out, Flush::None), status::Z_OK);
        assert_eq!(h.total_in(), 7);

        assert_eq!(initialize_deflate(&mut h), status::Z_OK);
        assert_eq!(h.total_in(), 0);
        assert_eq!(h.mode(), Some(StreamMode::Deflate));

        assert_eq!(initialize_inflate(&mut h), status::Z_OK);
        assert_eq!(h.mode(), Some(StreamMode::Inflate));
    }

    #[test]
    fn concurrent_inits_do_not_interfere() {
        let inputs: Vec<Vec<u8>> = vec![b"first thread payload".repeat(50), b"second".repeat(300)];

        let handles: Vec<_> = inputs
            .iter()
            .cloned()
            .map(|data| {
                thread::spawn(move || {
                    let mut d = StreamHandle::default();
                    let mut i = StreamHandle::default();
                    assert_eq!(initialize_deflate(&mut d), status::Z_OK);
                    assert_eq!(initialize_inflate(&mut i), status::Z_OK);
                    assert_eq!(i.avail_in(), 0);
                    assert!(i.next_in().is_none());

                    d.set_input(&data);
                    let mut compressed = Vec::with_capacity(data.len() + 64);
                    assert_eq!(deflate(&mut d, &mut compressed, Flush::Finish), status::Z_STREAM_END);
                    assert_eq!(d.total_in(), data.len() as u64);

                    i.set_input(&compressed);
                    let mut plain = Vec::with_capacity(data.len() + 64);
                    assert_eq!(inflate(&mut i, &mut plain, Flush::None), status::Z_STREAM_END);
                    plain
                })
            })
            .collect();

        for (h, expected) in handles.into_iter().zip(inputs) {
            assert_eq!(h.join().unwrap(), expected);
        }
    }

    #[test]
    fn abc_end_to_end() {
        let compressed = deflate_all(b"abc");
        assert_ne!(compressed, b"abc");
        assert_eq!(inflate_all(&compressed, 3), b"abc");
    }

    #[test]
    fn raw_format_roundtrip() {
        let data = b"raw deflate blocks without a zlib wrapper".repeat(4);

        let mut d = StreamHandle::default();
        assert_eq!(
            initialize_deflate_with(&mut d, level::Z_BEST_COMPRESSION, StreamFormat::Raw),
            status::Z_OK
        );
        d.set_input(&data);
        let mut compressed = Vec::with_capacity(data.len() + 64);
        assert_eq!(deflate(&mut d, &mut compressed, Flush::Finish), status::Z_STREAM_END);

        let mut i = StreamHandle::default();
        assert_eq!(initialize_inflate_with(&mut i, StreamFormat::Raw), status::Z_OK);
        i.set_input(&compressed);
        let mut plain = Vec::with_capacity(data.len() + 64);
        assert_eq!(inflate(&mut i, &mut plain, Flush::None), status::Z_STREAM_END);
        assert_eq!(plain, data);
    }

    #[test]
    fn corrupt_input_is_data_error() {
        let mut h = StreamHandle::default();
        assert_eq!(initialize_inflate(&mut h), status::Z_OK);
        h.set_input(b"not zlib data at all");
        let mut out = Vec::with_capacity(64);
        assert_eq!(inflate(&mut h, &mut out, Flush::None), status::Z_DATA_ERROR);
        assert!(h.msg().is_some());
    }

    #[test]
    fn invalid_level_leaves_handle_unusable() {
        let mut h = StreamHandle::default();
        assert_eq!(
            initialize_deflate_with(&mut h, 11, StreamFormat::Zlib),
            status::Z_STREAM_ERROR
        );
        assert!(!h.is_ready());
        let mut out = Vec::with_capacity(16);
        assert_eq!(deflate(&mut h, &mut out, Flush::Finish), status::Z_STREAM_ERROR);
    }

    #[test]
    fn teardown_on_uninitialized_handle_is_stream_error() {
        let mut h = StreamHandle::default();
        assert_eq!(deflate_end(&mut h), status::Z_STREAM_ERROR);
        assert_eq!(inflate_end(&mut h), status::Z_STREAM_ERROR);
        assert_eq!(inflate_reset(&mut h), status::Z_STREAM_ERROR);
    }

    #[test]
    fn inflate_reset_reuses_handle() {
        let first = deflate_all(b"first stream");
        let second = deflate_all(b"second stream");

        let mut h = StreamHandle::default();
        assert_eq!(initialize_inflate(&mut h), status::Z_OK);

        h.set_input(&first);
        let mut out = Vec::with_capacity(64);
        assert_eq!(inflate(&mut h, &mut out, Flush::None), status::Z_STREAM_END);
        assert_eq!(out, b"first stream");

        assert_eq!(inflate_reset(&mut h), status::Z_OK);
        h.set_input(&second);
        let mut out = Vec::with_capacity(64);
        assert_eq!(inflate(&mut h, &mut out, Flush::None), status::Z_STREAM_END);
        assert_eq!(out, b"second stream");
    }
}
