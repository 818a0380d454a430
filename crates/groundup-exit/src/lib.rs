//! Process termination through a direct system call
//!
//! The kernel is asked to end the process without going through the
//! runtime: no destructors run and buffered output is not flushed.

/// Status the book's exit example hands to the kernel
pub const DEFAULT_STATUS: i32 = 0;

/// `exit_group` system call number
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
pub const SYS_EXIT_GROUP: u64 = 231;

/// `exit_group` system call number
#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
pub const SYS_EXIT_GROUP: u64 = 94;

/// Terminate the process with `status`
///
/// The parent observes `status & 0xff`. Code following a call to this
/// function is unreachable.
pub fn exit(status: i32) -> ! {
    // SAFETY: exit_group takes a single integer and never returns.
    unsafe { sys_exit_group(status) }
}

/// Issue the raw `exit_group` system call
///
/// # Safety
/// Ends every thread of the process immediately. Nothing owned by the
/// caller is dropped.
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
#[inline(always)]
unsafe fn sys_exit_group(status: i32) -> ! {
    unsafe {
        std::arch::asm!(
            "syscall",
            in("rax") SYS_EXIT_GROUP,
            in("rdi") i64::from(status),
            options(noreturn, nostack)
        );
    }
}

/// Issue the raw `exit_group` system call
///
/// # Safety
/// Ends every thread of the process immediately. Nothing owned by the
/// caller is dropped.
#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
#[inline(always)]
unsafe fn sys_exit_group(status: i32) -> ! {
    unsafe {
        std::arch::asm!(
            "svc #0",
            in("x8") SYS_EXIT_GROUP,
            in("x0") i64::from(status),
            options(noreturn, nostack)
        );
    }
}

/// Portable fallback for targets without a hand-written syscall
///
/// # Safety
/// Always safe; kept `unsafe` to share the signature of the raw variants.
#[cfg(not(all(target_os = "linux", any(target_arch = "x86_64", target_arch = "aarch64"))))]
unsafe fn sys_exit_group(status: i32) -> ! {
    std::process::exit(status)
}
