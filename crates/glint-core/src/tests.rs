#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use web_time::Duration;

    use crate::effects::{Dispose, keyed_effect, mount_effect, render_effect};
    use crate::error::RuntimeError;
    use crate::host::{HostPage, RecordingPage, install_page, set_title};
    use crate::locals::{local, provide_local, try_local};
    use crate::runtime::{compose_frame, key_scope, remember, remember_with_key, take_frame_request};
    use crate::scope::Scope;
    use crate::signal::signal;
    use crate::time::{self, TestClock};
    use crate::timers::{next_deadline, run_due, set_interval, use_interval};

    fn install_test_clock() -> Rc<TestClock> {
        let clock = Rc::new(TestClock::new());
        time::set_clock(clock.clone());
        clock
    }

    #[test]
    fn signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
        assert_eq!(sig.with(|v| *v * 2), 202);
    }

    #[test]
    fn signal_write_requests_frame() {
        let sig = signal(0);
        take_frame_request();
        assert!(!take_frame_request());

        sig.set(1);
        assert!(take_frame_request());

        sig.update(|v| *v += 1);
        assert!(take_frame_request());
    }

    #[test]
    fn remember_slots_persist_across_frames() {
        let first = compose_frame(|| remember(|| signal(7)));
        first.set(8);
        let second = compose_frame(|| remember(|| signal(7)));
        assert_eq!(second.get(), 8);
    }

    #[test]
    fn remember_state_is_shared_mutable_storage() {
        use crate::runtime::remember_state;

        let first = compose_frame(|| remember_state(|| vec![1, 2]));
        first.borrow_mut().push(3);
        let second = compose_frame(|| remember_state(|| vec![1, 2]));
        assert_eq!(*second.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn remember_replaces_slot_on_type_change() {
        compose_frame(|| {
            remember(|| 1i32);
        });
        let s = compose_frame(|| remember(|| String::from("replaced")));
        assert_eq!(*s, "replaced");
    }

    #[test]
    fn keyed_remember_returns_existing() {
        let (a, b) = compose_frame(|| {
            let a = remember_with_key("k", || 42);
            let b = remember_with_key("k", || 100);
            (a, b)
        });
        assert_eq!(*a, 42);
        assert_eq!(*b, 42);
    }

    #[test]
    fn scope_dispose_runs_once_children_first() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let parent = Scope::new();
        let child = parent.child();
        {
            let order = order.clone();
            child.add_disposer(move || order.borrow_mut().push("child"));
        }
        {
            let order = order.clone();
            parent.add_disposer(move || order.borrow_mut().push("parent"));
        }

        parent.dispose();
        parent.dispose();
        assert_eq!(*order.borrow(), vec!["child", "parent"]);
    }

    #[test]
    fn render_effect_runs_after_every_commit() {
        let runs = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let runs = runs.clone();
            compose_frame(move || {
                render_effect(move || runs.set(runs.get() + 1));
            });
        }
        assert_eq!(runs.get(), 3);
    }

    #[test]
    fn keyed_effect_fires_on_mount_and_distinct_changes_only() {
        let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let frame = |key: i32| {
            let log = log.clone();
            compose_frame(move || {
                keyed_effect(key, move || {
                    log.borrow_mut().push(format!("run {key}"));
                    Dispose::new(move || log.borrow_mut().push(format!("clean {key}")))
                });
            });
        };

        frame(0);
        frame(0);
        frame(1);
        frame(1);
        frame(2);

        assert_eq!(
            *log.borrow(),
            vec!["run 0", "clean 0", "run 1", "clean 1", "run 2"]
        );
    }

    #[test]
    fn mount_effect_cleans_up_on_unmount() {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

        let frame = |mounted: bool| {
            let log = log.clone();
            compose_frame(move || {
                if mounted {
                    key_scope("panel", move || {
                        mount_effect(move || {
                            log.borrow_mut().push("mount");
                            Dispose::new(move || log.borrow_mut().push("unmount"))
                        });
                    });
                }
            });
        };

        frame(true);
        frame(true);
        assert_eq!(*log.borrow(), vec!["mount"]);

        frame(false);
        assert_eq!(*log.borrow(), vec!["mount", "unmount"]);

        // Remounting is a fresh instance.
        frame(true);
        assert_eq!(*log.borrow(), vec!["mount", "unmount", "mount"]);
    }

    #[test]
    fn interval_fires_and_catches_up() {
        let clock = install_test_clock();
        let ticks = Rc::new(Cell::new(0));

        let handle = {
            let ticks = ticks.clone();
            set_interval(Duration::from_millis(1000), move || {
                ticks.set(ticks.get() + 1)
            })
            .unwrap()
        };

        assert_eq!(run_due(), 0);

        clock.advance(Duration::from_millis(999));
        assert_eq!(run_due(), 0);

        clock.advance(Duration::from_millis(1));
        assert_eq!(run_due(), 1);
        assert_eq!(ticks.get(), 1);

        // A long stall fires every elapsed tick.
        clock.advance(Duration::from_millis(3500));
        assert_eq!(run_due(), 3);
        assert_eq!(ticks.get(), 4);

        let deadline = next_deadline().unwrap();
        assert_eq!(deadline.duration_since(time::now()), Duration::from_millis(500));

        handle.cancel();
        clock.advance(Duration::from_secs(10));
        assert_eq!(run_due(), 0);
        assert!(next_deadline().is_none());
    }

    #[test]
    fn zero_period_interval_is_rejected() {
        let err = set_interval(Duration::ZERO, || {}).map(|_| ()).unwrap_err();
        assert!(matches!(err, RuntimeError::ZeroInterval));
    }

    #[test]
    fn use_interval_cancels_on_unmount() {
        let clock = install_test_clock();
        let ticks = Rc::new(Cell::new(0));

        let frame = |mounted: bool| {
            let ticks = ticks.clone();
            compose_frame(move || {
                if mounted {
                    key_scope("clock", move || {
                        use_interval(Duration::from_millis(1000), move || {
                            ticks.set(ticks.get() + 1)
                        });
                    });
                }
            });
        };

        frame(true);
        frame(true);
        assert!(next_deadline().is_some());

        clock.advance(Duration::from_millis(1000));
        assert_eq!(run_due(), 1);
        assert_eq!(ticks.get(), 1);

        frame(false);
        assert!(next_deadline().is_none());

        clock.advance(Duration::from_secs(5));
        assert_eq!(run_due(), 0);
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn locals_fail_fast_outside_provider() {
        assert!(try_local::<i32>().is_err());

        let err = try_local::<i32>().unwrap_err();
        assert!(matches!(err, RuntimeError::MissingLocal(_)));

        let (outer, inner) = provide_local(1i32, || {
            let outer = local::<i32>();
            let inner = provide_local(2i32, local::<i32>);
            (outer, inner)
        });
        assert_eq!(outer, 1);
        assert_eq!(inner, 2);

        assert!(try_local::<i32>().is_err());
    }

    #[test]
    #[should_panic(expected = "no value of type")]
    fn local_panics_outside_provider() {
        let _ = local::<String>();
    }

    #[test]
    fn recording_page_captures_title_writes() {
        let page = Rc::new(RecordingPage::default());
        install_page(page.clone());

        set_title("one");
        set_title("two");

        assert_eq!(page.title_writes(), 2);
        assert_eq!(page.titles(), vec!["one", "two"]);
        assert_eq!(page.last_title().as_deref(), Some("two"));

        page.set_title("three");
        assert_eq!(page.title_writes(), 3);
    }

    #[test]
    fn test_clock_advances_wall_and_monotonic_together() {
        let clock = install_test_clock();
        let t0 = time::now();
        let w0 = time::wall();

        clock.advance(Duration::from_millis(1500));
        assert_eq!(time::now().duration_since(t0), Duration::from_millis(1500));
        assert_eq!(
            time::wall().duration_since(w0).unwrap(),
            Duration::from_millis(1500)
        );
    }
}
