// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given `block` or `stmt` so that it returns a `Result<()>`. It is just
/// syntactic sugar that helps having to write `Ok(())` repeatedly at the end of each
/// block. Here's an example.
///
/// ```
/// use sortviz::{CommonResult, throws};
///
/// fn do_something() -> CommonResult<()> {
///     throws!({
///         let _it = 1 + 1;
///     });
/// }
/// # do_something().unwrap();
/// ```
#[macro_export]
macro_rules! throws {
  ($it: block) => {{
    $it
    return Ok(())
  }};
  ($it: stmt) => {{
    $it
    return Ok(())
  }};
}

/// Wrap the given block or stmt so that it returns a `Result<$it>`. It is just
/// syntactic sugar that helps having to write `Ok($it)` repeatedly.
///
/// ```
/// use sortviz::{CommonResult, throws_with_return};
///
/// fn answer() -> CommonResult<u8> {
///     throws_with_return!({ 42 });
/// }
/// # assert_eq!(answer().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! throws_with_return {
    ($it: block) => {{
        return Ok($it);
    }};
    ($it: stmt) => {{
        return Ok($it);
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Send a signal to the main event loop. The channel is unbounded, so this never blocks
/// and never awaits, and it is fine to call while holding a lock. The two things to
/// pass in this macro are
/// 1. Sender
/// 2. Signal (to the MPSC channel)
///
/// If the receiver is gone (the app is exiting) the signal is dropped.
#[macro_export]
macro_rules! send_signal {
    (
        $main_thread_channel_sender : expr,
        $signal : expr
    ) => {{
        $main_thread_channel_sender.send($signal).ok();
    }};
}
