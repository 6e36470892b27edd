mod stream {
    use async_std::io::{self, Cursor, Read, ReadExt};
    use bytes::{Buf, BytesMut};
    use h1_head::{HeaderParser, Limits, Method, ParseError, Parser, RequestLineParser, Version};
    use http_types::StatusCode;
    use pretty_assertions::assert_eq;

    type Exception = Box<dyn std::error::Error + Send + Sync + 'static>;

    /// Bytes handed to the parsers per read, to force splits everywhere.
    const READ_SIZE: usize = 3;

    #[derive(Debug, PartialEq)]
    struct Head {
        method: Method,
        target: String,
        version: Version,
        fields: Vec<(String, String)>,
    }

    struct Connection<R> {
        io: R,
        buf: BytesMut,
        line: RequestLineParser,
        header: HeaderParser,
    }

    impl<R: Read + Unpin> Connection<R> {
        fn new(io: R, limits: Limits) -> Self {
            Self {
                io,
                buf: BytesMut::new(),
                line: RequestLineParser::with_limits(limits),
                header: HeaderParser::with_limits(limits),
            }
        }

        async fn fill(&mut self) -> io::Result<usize> {
            let mut chunk = [0; READ_SIZE];
            let n = self.io.read(&mut chunk).await?;
            self.buf.extend_from_slice(&chunk[..n]);
            Ok(n)
        }

        async fn fill_or_eof(&mut self) -> io::Result<()> {
            match self.fill().await? {
                0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "head cut short")),
                _ => Ok(()),
            }
        }

        /// Read the next request head, `None` on a clean end of stream.
        async fn next_head(&mut self) -> Result<Option<Head>, Exception> {
            self.line.reset();

            while !self.line.is_done() {
                if self.buf.is_empty() && self.fill().await? == 0 {
                    return Ok(None);
                }
                self.line.offer(&mut self.buf)?;
            }

            let mut fields = Vec::new();
            loop {
                if self.header.offset() == 0 {
                    while self.buf.len() < 2 {
                        self.fill_or_eof().await?;
                    }
                    if self.buf.starts_with(b"\r\n") {
                        self.buf.advance(2);
                        break;
                    }
                }

                if self.buf.is_empty() {
                    self.fill_or_eof().await?;
                }
                self.header.offer(&mut self.buf)?;

                if let Some((name, value)) = self.header.field()? {
                    fields.push((name.to_owned(), value.to_owned()));
                    self.header.reset();
                }
            }

            Ok(Some(Head {
                method: self.line.method()?.ok_or("no method")?,
                target: self.line.target()?.ok_or("no target")?.to_owned(),
                version: self.line.version()?.ok_or("no version")?,
                fields,
            }))
        }
    }

    fn field(name: &str, value: &str) -> (String, String) {
        (name.to_owned(), value.to_owned())
    }

    #[async_std::test]
    async fn pipelined_requests() -> Result<(), Exception> {
        let input: &[u8] = b"GET /one HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\nPUT /two HTTP/1.0\r\nContent-Length: 0\r\n\r\n";
        let mut conn = Connection::new(Cursor::new(input), Limits::recommended());

        let first = conn.next_head().await?.unwrap();
        assert_eq!(
            first,
            Head {
                method: Method::Get,
                target: "/one".into(),
                version: Version::Http1_1,
                fields: vec![field("Host", "example.com"), field("Accept", "*/*")],
            }
        );

        let second = conn.next_head().await?.unwrap();
        assert_eq!(second.method, Method::Put);
        assert_eq!(second.version, Version::Http1_0);
        assert_eq!(second.fields, vec![field("Content-Length", "0")]);

        assert!(conn.next_head().await?.is_none());
        Ok(())
    }

    #[async_std::test]
    async fn head_without_fields() -> Result<(), Exception> {
        let input: &[u8] = b"OPTIONS * HTTP/1.1\r\n\r\n";
        let mut conn = Connection::new(Cursor::new(input), Limits::new());

        let head = conn.next_head().await?.unwrap();
        assert_eq!(head.method, Method::Options);
        assert_eq!(head.target, "*");
        assert!(head.fields.is_empty());
        Ok(())
    }

    #[async_std::test]
    async fn fields_across_read_boundaries() -> Result<(), Exception> {
        let input: &[u8] = b"GET / HTTP/1.1\r\nAb: Val\r\nCd: x\r\n\r\n";
        let mut conn = Connection::new(Cursor::new(input), Limits::new());

        let head = conn.next_head().await?.unwrap();
        assert_eq!(head.fields, vec![field("Ab", "Val"), field("Cd", "x")]);
        Ok(())
    }

    #[async_std::test]
    async fn oversized_field_maps_to_431() {
        let input: &[u8] = b"GET / HTTP/1.1\r\nX-Long: aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\r\n\r\n";
        let limits = Limits::new().max_header_value_length(16);
        let mut conn = Connection::new(Cursor::new(input), limits);

        let err = conn.next_head().await.unwrap_err();
        let err = err.downcast_ref::<ParseError>().unwrap();
        assert_eq!(err.status(), StatusCode::RequestHeaderFieldsTooLarge);
        assert_eq!(err.offset(), Some(24));
        assert!(!conn.header.is_valid());
    }

    #[async_std::test]
    async fn malformed_line_maps_to_400() {
        let input: &[u8] = b"GET /\r\nHost: example.com\r\n\r\n";
        let mut conn = Connection::new(Cursor::new(input), Limits::new());

        let err = conn.next_head().await.unwrap_err();
        let err = err.downcast_ref::<ParseError>().unwrap();
        assert_eq!(err.status(), StatusCode::BadRequest);
        assert_eq!(err.offset(), Some(5));
    }

    #[async_std::test]
    async fn truncated_head() {
        let input: &[u8] = b"GET / HTTP/1.1\r\nHost: exa";
        let mut conn = Connection::new(Cursor::new(input), Limits::new());

        let err = conn.next_head().await.unwrap_err();
        let err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
