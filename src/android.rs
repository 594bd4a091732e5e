//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{render_predictions_to_svg, timeline_json, LayoutConfig, Result};

fn to_jstring(env: &mut JNIEnv, result: Result<String>) -> jstring {
    match result {
        Ok(s) => match env.new_string(&s) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("chordscore JNI call failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render predictions JSON to an SVG score.
///
/// Called from Kotlin as:
///   external fun renderScore(json: String, pageWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordscore_app_ChordScore_renderScore(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
    page_width: jfloat,
) -> jstring {
    let json: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let pw = if page_width > 0.0 { Some(page_width as f64) } else { None };

    let result = render_predictions_to_svg(&json, &LayoutConfig::default(), pw);
    to_jstring(&mut env, result)
}

/// Lay out predictions JSON as a timeline, returned as JSON.
///
/// Called from Kotlin as:
///   external fun layoutTimeline(json: String, spacingPx: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordscore_app_ChordScore_layoutTimeline(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
    spacing_px: jfloat,
) -> jstring {
    let json: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let config = LayoutConfig::default();
    let spacing = if spacing_px > 0.0 { spacing_px as f64 } else { config.timeline_spacing };

    let result = timeline_json(&json, spacing, &config);
    to_jstring(&mut env, result)
}
