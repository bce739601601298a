use valentine_journey::timer::{FrameLoop, Interval, Timeout};

#[test]
fn interval_fires_once_per_period() {
    let mut i = Interval::start(0, 1000);
    assert!(!i.poll(999));
    assert!(i.poll(1000));
    assert!(!i.poll(1500));
    assert!(i.poll(2000));
}

#[test]
fn interval_catches_up_one_step_per_poll() {
    let mut i = Interval::start(0, 1000);
    let mut fired = 0;
    while i.poll(3500) {
        fired += 1;
    }
    assert_eq!(fired, 3);
}

#[test]
fn cancelled_interval_never_fires() {
    let mut i = Interval::start(0, 1000);
    i.cancel();
    assert!(!i.is_active());
    assert!(!i.poll(10_000));
}

#[test]
fn restarted_interval_counts_from_restart() {
    let mut i = Interval::start(0, 1000);
    i.cancel();
    i.restart(5000);
    assert!(!i.poll(5999));
    assert!(i.poll(6000));
}

#[test]
fn timeout_fires_exactly_once() {
    let mut t = Timeout::arm(100, 2000);
    assert!(!t.poll(2099));
    assert!(t.poll(2100));
    assert!(!t.poll(2100));
    assert!(!t.poll(50_000));
    assert!(!t.is_armed());
}

#[test]
fn cancelled_timeout_never_fires() {
    let mut t = Timeout::arm(0, 10);
    t.cancel();
    assert!(!t.poll(1_000));
}

#[test]
fn frame_loop_stops_after_cancel() {
    let mut f = FrameLoop::started();
    assert!(f.begin_frame());
    assert!(f.begin_frame());
    f.cancel();
    assert!(!f.begin_frame());
    assert_eq!(f.frames(), 2);
    f.restart();
    assert!(f.begin_frame());
    assert_eq!(f.frames(), 3);
}
