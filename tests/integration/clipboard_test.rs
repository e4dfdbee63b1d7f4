//! Integration tests for the clipboard module.

use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Core Types
// =============================================================================

mod method_tests {
    use copycat::clipboard::ClipboardMethod;

    #[test]
    fn method_name_returns_correct_strings() {
        assert_eq!(ClipboardMethod::Xclip.name(), "xclip");
        assert_eq!(ClipboardMethod::Xsel.name(), "xsel");
        assert_eq!(ClipboardMethod::WlClipboard.name(), "wl-clipboard");
        assert_eq!(ClipboardMethod::Pbcopy.name(), "pbcopy");
        assert_eq!(ClipboardMethod::Windows.name(), "windows");
    }

    #[test]
    fn from_name_accepts_program_aliases() {
        assert_eq!(
            ClipboardMethod::from_name("wl-copy").unwrap(),
            ClipboardMethod::WlClipboard
        );
        assert_eq!(
            ClipboardMethod::from_name("PBPASTE").unwrap(),
            ClipboardMethod::Pbcopy
        );
    }
}

mod error_tests {
    use copycat::clipboard::ClipboardError;

    #[test]
    #[cfg(target_os = "linux")]
    fn no_tool_available_has_helpful_linux_message() {
        let msg = ClipboardError::NoToolAvailable.to_string();
        assert!(msg.contains("xclip"));
        assert!(msg.contains("xsel"));
        assert!(msg.contains("wl-clipboard"));
    }

    #[test]
    fn unknown_tool_names_the_tool() {
        let msg = ClipboardError::UnknownTool("klipper".to_string()).to_string();
        assert!(msg.contains("klipper"));
    }

    #[test]
    fn clipboard_error_converts_into_crate_error() {
        let err: copycat::Error = ClipboardError::NoToolAvailable.into();
        assert!(matches!(err, copycat::Error::ClipboardUnavailable(_)));
        assert_eq!(err.exit_code(), 1);
    }
}

mod tool_tests {
    use copycat::clipboard::tool::{ClipboardTool, ToolError};
    use copycat::clipboard::ClipboardMethod;

    #[test]
    fn tool_error_failed_contains_message() {
        let err = ToolError::Failed("something went wrong".to_string());
        if let ToolError::Failed(msg) = err.clone() {
            assert_eq!(msg, "something went wrong");
        } else {
            panic!("Expected ToolError::Failed variant");
        }
    }

    struct TestTool;

    impl ClipboardTool for TestTool {
        fn method(&self) -> ClipboardMethod {
            ClipboardMethod::Xsel
        }

        fn is_available(&self) -> bool {
            true
        }

        fn try_set(&self, _text: &[u8]) -> Result<(), ToolError> {
            Ok(())
        }

        fn try_get(&self) -> Result<Vec<u8>, ToolError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn default_name_implementation_uses_method_name() {
        assert_eq!(TestTool.name(), "xsel");
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

mod orchestrator_tests {
    use super::*;
    use copycat::clipboard::tool::{ClipboardTool, ToolError};
    use copycat::clipboard::{Clipboard, ClipboardBackend, ClipboardError, ClipboardMethod};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A mock tool for testing the Clipboard orchestrator.
    struct MockTool {
        method: ClipboardMethod,
        available: bool,
        set_result: Result<(), ToolError>,
        get_result: Result<Vec<u8>, ToolError>,
        received: Rc<RefCell<Vec<u8>>>,
        calls: Rc<AtomicUsize>,
    }

    impl MockTool {
        fn new(method: ClipboardMethod) -> Self {
            Self {
                method,
                available: true,
                set_result: Ok(()),
                get_result: Ok(Vec::new()),
                received: Rc::new(RefCell::new(Vec::new())),
                calls: Rc::new(AtomicUsize::new(0)),
            }
        }

        fn available(mut self, available: bool) -> Self {
            self.available = available;
            self
        }

        fn set_result(mut self, result: Result<(), ToolError>) -> Self {
            self.set_result = result;
            self
        }

        fn get_result(mut self, result: Result<Vec<u8>, ToolError>) -> Self {
            self.get_result = result;
            self
        }

        fn calls(&self) -> Rc<AtomicUsize> {
            Rc::clone(&self.calls)
        }

        fn received(&self) -> Rc<RefCell<Vec<u8>>> {
            Rc::clone(&self.received)
        }
    }

    impl ClipboardTool for MockTool {
        fn method(&self) -> ClipboardMethod {
            self.method
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn try_set(&self, text: &[u8]) -> Result<(), ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.received.borrow_mut() = text.to_vec();
            self.set_result.clone()
        }

        fn try_get(&self) -> Result<Vec<u8>, ToolError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.get_result.clone()
        }
    }

    #[test]
    fn with_tools_accepts_empty_vec() {
        let clipboard = Clipboard::with_tools(vec![]);
        assert!(clipboard.tools().is_empty());
    }

    #[test]
    fn empty_tool_list_is_no_tool_available() {
        let clipboard = Clipboard::with_tools(vec![]);
        assert!(matches!(
            clipboard.set(b"x"),
            Err(ClipboardError::NoToolAvailable)
        ));
        assert!(matches!(
            clipboard.get(),
            Err(ClipboardError::NoToolAvailable)
        ));
    }

    #[test]
    fn set_passes_bytes_through_unchanged() {
        let tool = MockTool::new(ClipboardMethod::Xclip);
        let received = tool.received();
        let clipboard = Clipboard::with_tools(vec![Box::new(tool)]);

        let method = clipboard.set(b"a\0b\n").unwrap();
        assert_eq!(method, ClipboardMethod::Xclip);
        assert_eq!(*received.borrow(), b"a\0b\n");
    }

    #[test]
    fn first_available_tool_wins() {
        let first = MockTool::new(ClipboardMethod::Xclip);
        let second = MockTool::new(ClipboardMethod::Xsel);
        let second_calls = second.calls();

        let clipboard = Clipboard::with_tools(vec![Box::new(first), Box::new(second)]);
        assert_eq!(clipboard.set(b"x").unwrap(), ClipboardMethod::Xclip);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn skips_unavailable_tools() {
        let unavailable = MockTool::new(ClipboardMethod::Xclip).available(false);
        let unavailable_calls = unavailable.calls();
        let available = MockTool::new(ClipboardMethod::Xsel);

        let clipboard = Clipboard::with_tools(vec![Box::new(unavailable), Box::new(available)]);
        assert_eq!(clipboard.set(b"x").unwrap(), ClipboardMethod::Xsel);
        assert_eq!(unavailable_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn falls_back_when_a_tool_fails() {
        let failing = MockTool::new(ClipboardMethod::Xclip)
            .set_result(Err(ToolError::Failed("can't open display".to_string())));
        let working = MockTool::new(ClipboardMethod::Xsel);

        let clipboard = Clipboard::with_tools(vec![Box::new(failing), Box::new(working)]);
        assert_eq!(clipboard.set(b"x").unwrap(), ClipboardMethod::Xsel);
    }

    #[test]
    fn falls_back_when_a_program_is_missing() {
        let missing = MockTool::new(ClipboardMethod::Xclip).get_result(Err(ToolError::NotFound));
        let working =
            MockTool::new(ClipboardMethod::Xsel).get_result(Ok(b"from xsel".to_vec()));

        let clipboard = Clipboard::with_tools(vec![Box::new(missing), Box::new(working)]);
        let (method, text) = clipboard.get().unwrap();
        assert_eq!(method, ClipboardMethod::Xsel);
        assert_eq!(text, b"from xsel");
    }

    #[test]
    fn all_tools_failing_is_no_tool_available() {
        let a = MockTool::new(ClipboardMethod::Xclip)
            .set_result(Err(ToolError::Failed("a".to_string())));
        let b = MockTool::new(ClipboardMethod::Xsel).set_result(Err(ToolError::NotSupported));

        let clipboard = Clipboard::with_tools(vec![Box::new(a), Box::new(b)]);
        assert!(matches!(
            clipboard.set(b"x"),
            Err(ClipboardError::NoToolAvailable)
        ));
    }

    #[test]
    fn empty_clipboard_is_a_successful_read() {
        let tool = MockTool::new(ClipboardMethod::Pbcopy).get_result(Ok(Vec::new()));
        let clipboard = Clipboard::with_tools(vec![Box::new(tool)]);
        assert!(clipboard.get_text().unwrap().is_empty());
    }

    #[test]
    fn prefer_moves_tool_to_front() {
        let mut clipboard = Clipboard::with_tools(vec![
            Box::new(MockTool::new(ClipboardMethod::Xclip)),
            Box::new(MockTool::new(ClipboardMethod::Xsel)),
            Box::new(MockTool::new(ClipboardMethod::WlClipboard)),
        ]);
        clipboard.prefer(ClipboardMethod::WlClipboard);

        let names: Vec<_> = clipboard.tools().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["wl-clipboard", "xclip", "xsel"]);
        assert_eq!(clipboard.set(b"x").unwrap(), ClipboardMethod::WlClipboard);
    }

    #[test]
    fn prefer_unknown_to_platform_keeps_order() {
        let mut clipboard = Clipboard::with_tools(vec![
            Box::new(MockTool::new(ClipboardMethod::Xclip)),
            Box::new(MockTool::new(ClipboardMethod::Xsel)),
        ]);
        clipboard.prefer(ClipboardMethod::Pbcopy);

        let names: Vec<_> = clipboard.tools().iter().map(|t| t.name()).collect();
        assert_eq!(names, ["xclip", "xsel"]);
    }
}

// =============================================================================
// Platform Tools
// =============================================================================

mod platform_tools_tests {
    use copycat::clipboard::tool::ClipboardTool;
    use copycat::clipboard::tools::{platform_tools, Pbcopy, WindowsClipboard, Xclip, Xsel};
    use copycat::clipboard::ClipboardMethod;

    #[test]
    #[cfg(target_os = "linux")]
    fn platform_tools_returns_xclip_xsel_wl_clipboard_on_linux() {
        let tools = platform_tools();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].name(), "xclip");
        assert_eq!(tools[1].name(), "xsel");
        assert_eq!(tools[2].name(), "wl-clipboard");
    }

    #[test]
    #[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
    fn platform_tools_returns_empty_on_other_platforms() {
        assert!(platform_tools().is_empty());
    }

    #[test]
    fn tools_report_their_method() {
        assert_eq!(Xclip::new().method(), ClipboardMethod::Xclip);
        assert_eq!(Xsel::new().method(), ClipboardMethod::Xsel);
        assert_eq!(Pbcopy::new().method(), ClipboardMethod::Pbcopy);
        assert_eq!(WindowsClipboard::new().method(), ClipboardMethod::Windows);
    }

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn pbcopy_is_unavailable_off_macos() {
        assert!(!Pbcopy::new().is_available());
    }

    #[test]
    #[cfg(not(windows))]
    fn windows_clipboard_is_unavailable_off_windows() {
        assert!(!WindowsClipboard::new().is_available());
    }
}
