//! End-to-end tests for camera capture.
//!
//! These need real hardware and skip themselves when no camera is present:
//! - Device enumeration works without a camera
//! - An open camera delivers RGB frames through `FrameSource`
//! - A missing device is reported, not panicked on

use ascii_cam::ascii::{AsciiConverter, ColorMode};
use ascii_cam::camera::{list_devices, CameraCapture, CameraError, CameraSettings, FrameSource};

/// Test that list_devices returns devices (or empty list) without error.
#[test]
fn test_list_devices_succeeds() {
    let result = list_devices();
    assert!(
        result.is_ok(),
        "list_devices should not error: {:?}",
        result.err()
    );

    let devices = result.unwrap();
    println!("Found {} camera device(s)", devices.len());
    for device in &devices {
        println!("  {}", device);
    }
}

/// Test that an invalid device index is rejected cleanly.
#[test]
fn test_open_invalid_device() {
    let settings = CameraSettings {
        device_index: 999,
        ..CameraSettings::default()
    };
    match CameraCapture::open(settings) {
        Err(CameraError::DeviceNotFound(999)) | Err(CameraError::NoDevices) => {}
        Err(CameraError::QueryFailed(msg)) => println!("SKIP: camera query failed: {}", msg),
        Err(other) => panic!("Expected DeviceNotFound or NoDevices, got {:?}", other),
        Ok(_) => panic!("Device 999 should not exist"),
    }
}

/// Test that frames can be read and converted when a camera is available.
#[test]
fn test_read_and_convert_frames() {
    let devices = match list_devices() {
        Ok(d) => d,
        Err(e) => {
            println!("SKIP: camera query failed: {}", e);
            return;
        }
    };
    if devices.is_empty() {
        println!("SKIP: No cameras available for this test");
        return;
    }

    let mut camera = match CameraCapture::open(CameraSettings::default()) {
        Ok(camera) => camera,
        Err(e) => {
            println!("SKIP: camera could not be opened: {}", e);
            return;
        }
    };
    println!(
        "Camera streaming at {} @ {} fps",
        camera.actual_resolution(),
        camera.actual_fps()
    );

    let mut converter = AsciiConverter::new(60, ColorMode::Grayscale);
    for _ in 0..5 {
        let frame = camera.read_frame().expect("Frame should be readable");
        assert!(frame.width > 0 && frame.height > 0);
        assert_eq!(
            frame.data.len(),
            (frame.width * frame.height * 3) as usize
        );

        let text = converter.convert(&frame);
        assert!(text.lines().all(|l| l.chars().count() == 60));
    }
}
