//! Owner and group name resolution.
//!
//! The owner/group column is a pluggable capability: the walker asks an
//! [`IdentityResolver`] for names and omits the column entirely when the
//! resolver declines.

use hellcat_core::{IdentityMode, Ownership, abbreviate};

/// Width of the owner and group columns.
pub const ID_WIDTH: usize = 8;

/// Resolves numeric owner/group ids to display names.
pub trait IdentityResolver {
    /// Whether the owner/group column is printed at all.
    fn enabled(&self) -> bool {
        true
    }

    /// Name for a user id, if the host knows it.
    fn user_name(&self, uid: u32) -> Option<String>;

    /// Name for a group id, if the host knows it.
    fn group_name(&self, gid: u32) -> Option<String>;

    /// Render the ` owner group` column for an entry.
    ///
    /// Unknown ids fall back to their numeric form. Returns an empty
    /// string when the resolver is disabled or the entry has no
    /// ownership information.
    fn column(&self, ownership: Option<Ownership>) -> String {
        let Some(ownership) = ownership.filter(|_| self.enabled()) else {
            return String::new();
        };
        let owner = self
            .user_name(ownership.uid)
            .unwrap_or_else(|| ownership.uid.to_string());
        let group = self
            .group_name(ownership.gid)
            .unwrap_or_else(|| ownership.gid.to_string());

        format!(
            " {:>width$} {:>width$}",
            abbreviate(&owner, ID_WIDTH),
            abbreviate(&group, ID_WIDTH),
            width = ID_WIDTH
        )
    }
}

/// Omits the owner/group column.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIdentity;

impl IdentityResolver for NoIdentity {
    fn enabled(&self) -> bool {
        false
    }

    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

/// Prints raw numeric ids without consulting the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericIdentity;

impl IdentityResolver for NumericIdentity {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

/// Looks names up in the host user and group databases.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

#[cfg(unix)]
impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> Option<String> {
        sys::user_name(uid)
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        sys::group_name(gid)
    }
}

/// Resolver for the configured mode.
///
/// Name lookups fall back to [`NoIdentity`] on platforms without a user
/// database.
pub fn default_resolver(mode: IdentityMode) -> Box<dyn IdentityResolver> {
    match mode {
        IdentityMode::Names => platform_resolver(),
        IdentityMode::Numeric => Box::new(NumericIdentity),
        IdentityMode::Hidden => Box::new(NoIdentity),
    }
}

#[cfg(unix)]
fn platform_resolver() -> Box<dyn IdentityResolver> {
    Box::new(SystemIdentity)
}

#[cfg(not(unix))]
fn platform_resolver() -> Box<dyn IdentityResolver> {
    Box::new(NoIdentity)
}

#[cfg(unix)]
mod sys {
    use std::ffi::CStr;
    use std::ptr;

    const MIN_BUF: usize = 1024;
    const MAX_BUF: usize = 1024 * 1024;

    /// Initial scratch buffer size suggested by the C library.
    fn initial_buf_len(name: libc::c_int) -> usize {
        // sysconf may return -1 when there is no fixed limit.
        let size = unsafe { libc::sysconf(name) };
        let len = if size > 0 {
            usize::try_from(size).unwrap_or(16 * 1024)
        } else {
            16 * 1024
        };
        len.clamp(MIN_BUF, MAX_BUF)
    }

    pub(super) fn user_name(uid: u32) -> Option<String> {
        let mut buf_len = initial_buf_len(libc::_SC_GETPW_R_SIZE_MAX);

        loop {
            let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = ptr::null_mut();
            let mut buf: Vec<u8> = vec![0u8; buf_len];

            let rc = unsafe {
                libc::getpwuid_r(
                    uid,
                    &mut pwd,
                    buf.as_mut_ptr() as *mut libc::c_char,
                    buf.len(),
                    &mut result,
                )
            };
            if rc == libc::ERANGE && buf_len < MAX_BUF {
                buf_len *= 2;
                continue;
            }
            if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
                return None;
            }

            let name = unsafe { CStr::from_ptr(pwd.pw_name) };
            return Some(name.to_string_lossy().into_owned());
        }
    }

    pub(super) fn group_name(gid: u32) -> Option<String> {
        let mut buf_len = initial_buf_len(libc::_SC_GETGR_R_SIZE_MAX);

        loop {
            let mut grp: libc::group = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::group = ptr::null_mut();
            let mut buf: Vec<u8> = vec![0u8; buf_len];

            let rc = unsafe {
                libc::getgrgid_r(
                    gid,
                    &mut grp,
                    buf.as_mut_ptr() as *mut libc::c_char,
                    buf.len(),
                    &mut result,
                )
            };
            if rc == libc::ERANGE && buf_len < MAX_BUF {
                buf_len *= 2;
                continue;
            }
            if rc != 0 || result.is_null() || grp.gr_name.is_null() {
                return None;
            }

            let name = unsafe { CStr::from_ptr(grp.gr_name) };
            return Some(name.to_string_lossy().into_owned());
        }
    }
}
