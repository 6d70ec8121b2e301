#[macro_export]
macro_rules! herald_err {
    // Case with just a message literal
    ($kind:expr, $msg:expr) => {
        HeraldError {
            kind: $kind,
            message: $msg.into(),
            file: file!(),
            line: line!(),
        }
    };
    // Case with message + format arguments
    ($kind:expr, $fmt:expr, $($args:tt)*) => {
        HeraldError {
            kind: $kind,
            message: format!($fmt, $($args)*),
            file: file!(),
            line: line!(),
        }
    };
}

#[derive(Debug)]
pub struct HeraldError {
    pub kind: HeraldErrorKind,
    pub message: String,
    pub file: &'static str,
    pub line: u32,
}

impl HeraldError {
    /// Transport-level failures come from the bus connection itself.
    /// Everything else is a rejection of the call's content or local IO.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            HeraldErrorKind::DBusConnect
                | HeraldErrorKind::NameAcquire
                | HeraldErrorKind::Serve
                | HeraldErrorKind::ProxyCreate
                | HeraldErrorKind::ProxyCall
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeraldErrorKind {
    DBusConnect,
    NameAcquire,
    Serve,
    ProxyCreate,
    ProxyCall,

    InvalidHint,
    InvalidFlag,
    UnknownCapability,

    Deserialize,

    FileOpen,

    DirCreate,
    DirRead,
}
