//! C ABI over opaque handles.
//!
//! Every function tolerates null handles: getters return zero or null and
//! `phys_run` reports `RES_ERR_NULL_PTR`.

use crate::{
    body::Body,
    error::{self, RES_ERR_NULL_PTR},
    simulation::Simulation,
    vector::{Polar, Vec2},
};
use std::ffi::{CStr, c_char, c_int, c_uint};
use std::ptr;

fn strerror_cstr(result: c_int) -> &'static CStr {
    match result {
        error::RES_OK => c"Success",
        error::RES_ERR_NULL_PTR => c"Null pointer error",
        error::RES_ERR_ZERO_DIST => c"Zero distance error",
        error::RES_ERR_ZERO_MASS => c"Zero mass error",
        error::RES_ERR_OUT_OF_RANGE => c"Index out of range error",
        _ => c"Unknown error code",
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn phys_strerror(result: c_int) -> *const c_char {
    strerror_cstr(result).as_ptr()
}

// Vector

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pvec_set_scs(pvec: *mut Vec2, len: f64, angle: f64) {
    if let Some(v) = unsafe { pvec.as_mut() } {
        v.set_polar(len, angle);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pvec_get_x(pvec: *const Vec2) -> f64 {
    unsafe { pvec.as_ref() }.map_or(0.0, |v| v.x)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pvec_get_y(pvec: *const Vec2) -> f64 {
    unsafe { pvec.as_ref() }.map_or(0.0, |v| v.y)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pvec_set_x(pvec: *mut Vec2, x: f64) {
    if let Some(v) = unsafe { pvec.as_mut() } {
        v.x = x;
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pvec_set_y(pvec: *mut Vec2, y: f64) {
    if let Some(v) = unsafe { pvec.as_mut() } {
        v.y = y;
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pvec_get_len(pvec: *const Vec2) -> f64 {
    unsafe { pvec.as_ref() }.map_or(0.0, |v| v.length())
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pvec_get_angle(pvec: *const Vec2) -> f64 {
    unsafe { pvec.as_ref() }.map_or(0.0, |v| v.angle())
}

// Object

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pobj_ref_pos(pobj: *mut Body) -> *mut Vec2 {
    unsafe { pobj.as_mut() }.map_or(ptr::null_mut(), |b| b.pos_mut() as *mut Vec2)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pobj_ref_mov(pobj: *mut Body) -> *mut Vec2 {
    unsafe { pobj.as_mut() }.map_or(ptr::null_mut(), |b| b.vel_mut() as *mut Vec2)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pobj_get_mass(pobj: *const Body) -> f64 {
    unsafe { pobj.as_ref() }.map_or(0.0, Body::mass)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pobj_set_mass(pobj: *mut Body, mass: f64) {
    if let Some(b) = unsafe { pobj.as_mut() } {
        b.set_mass(mass);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pobj_get_radius(pobj: *const Body) -> f64 {
    unsafe { pobj.as_ref() }.map_or(0.0, Body::radius)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn pobj_set_radius(pobj: *mut Body, radius: f64) {
    if let Some(b) = unsafe { pobj.as_mut() } {
        b.set_radius(radius);
    }
}

// Phys

/// Returns null if the bodies could not be allocated.
#[unsafe(no_mangle)]
pub extern "C" fn phys_create(objects_num: c_uint) -> *mut Simulation {
    match Simulation::new(objects_num as usize) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(e) => {
            log::warn!("phys_create: {}", e);
            ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_destroy(phys: *mut Simulation) {
    if !phys.is_null() {
        unsafe { drop(Box::from_raw(phys)) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_get_density(phys: *const Simulation) -> f64 {
    unsafe { phys.as_ref() }.map_or(0.0, Simulation::density)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_set_density(phys: *mut Simulation, density: f64) {
    if let Some(sim) = unsafe { phys.as_mut() } {
        sim.set_density(density);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_ref_accel_of_gravity(phys: *mut Simulation) -> *mut Vec2 {
    unsafe { phys.as_mut() }.map_or(ptr::null_mut(), |sim| {
        sim.accel_of_gravity_mut() as *mut Vec2
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_ref_wind(phys: *mut Simulation) -> *mut Vec2 {
    unsafe { phys.as_mut() }.map_or(ptr::null_mut(), |sim| sim.wind_mut() as *mut Vec2)
}

/// Returns null when `id` is out of range.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_ref_object(phys: *mut Simulation, id: c_uint) -> *mut Body {
    unsafe { phys.as_mut() }
        .and_then(|sim| sim.body_mut(id as usize).ok())
        .map_or(ptr::null_mut(), |b| b as *mut Body)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_get_objects_num(phys: *const Simulation) -> c_uint {
    unsafe { phys.as_ref() }.map_or(0, |sim| sim.len() as c_uint)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_get_is_gravity(phys: *const Simulation) -> c_int {
    unsafe { phys.as_ref() }.map_or(0, |sim| sim.is_mutual_gravity() as c_int)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_set_is_gravity(phys: *mut Simulation, is_gravity: c_int) {
    if let Some(sim) = unsafe { phys.as_mut() } {
        sim.set_mutual_gravity(is_gravity != 0);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_get_time(phys: *const Simulation) -> f64 {
    unsafe { phys.as_ref() }.map_or(0.0, Simulation::time)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn phys_run(phys: *mut Simulation, step_time: f64, steps: c_uint) -> c_int {
    match unsafe { phys.as_mut() } {
        Some(sim) => error::result_code(&sim.advance(step_time, steps)),
        None => {
            log::warn!("phys_run: null simulation handle");
            RES_ERR_NULL_PTR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strerror_matches_descriptions() {
        for code in -5..=1 {
            let s = unsafe { CStr::from_ptr(phys_strerror(code)) };
            assert_eq!(s.to_str().unwrap(), error::describe(code));
        }
    }

    #[test]
    fn round_trip_through_handles() {
        let phys = phys_create(1);
        assert!(!phys.is_null());
        unsafe {
            assert_eq!(phys_get_objects_num(phys), 1);

            phys_set_density(phys, 0.75);
            assert_eq!(phys_get_density(phys), 0.75);

            let g = phys_ref_accel_of_gravity(phys);
            pvec_set_y(g, -9.80665);
            assert_eq!(pvec_get_y(g), -9.80665);

            let wind = phys_ref_wind(phys);
            pvec_set_x(wind, 0.5);
            assert_eq!(pvec_get_x(wind), 0.5);

            phys_set_is_gravity(phys, 1);
            assert_eq!(phys_get_is_gravity(phys), 1);
            phys_set_is_gravity(phys, 0);
            assert_eq!(phys_get_is_gravity(phys), 0);

            let obj = phys_ref_object(phys, 0);
            assert!(!obj.is_null());
            assert!(phys_ref_object(phys, 1).is_null());

            pobj_set_mass(obj, 2.0);
            pobj_set_radius(obj, 0.03);
            assert_eq!(pobj_get_mass(obj), 2.0);
            assert_eq!(pobj_get_radius(obj), 0.03);

            let mov = pobj_ref_mov(obj);
            pvec_set_scs(mov, 2.0, 0.0);
            assert_eq!(pvec_get_len(mov), 2.0);
            assert_eq!(pvec_get_angle(mov), 0.0);

            assert_eq!(phys_get_time(phys), 0.0);
            assert_eq!(phys_run(phys, 0.125, 1), error::RES_OK);
            assert_eq!(phys_get_time(phys), 0.125);

            let pos = pobj_ref_pos(obj);
            assert!(pvec_get_x(pos) > 0.0);
            assert!(pvec_get_y(pos) < 0.0);

            phys_destroy(phys);
        }
    }

    #[test]
    fn zero_mass_is_reported_as_code() {
        let phys = phys_create(1);
        unsafe {
            assert_eq!(phys_run(phys, 1.0, 1), error::RES_ERR_ZERO_MASS);
            assert_eq!(phys_get_time(phys), 0.0);
            phys_destroy(phys);
        }
    }

    #[test]
    fn null_handles_are_harmless() {
        unsafe {
            assert_eq!(phys_run(ptr::null_mut(), 1.0, 1), RES_ERR_NULL_PTR);
            assert_eq!(phys_get_time(ptr::null()), 0.0);
            assert_eq!(phys_get_objects_num(ptr::null()), 0);
            assert!(phys_ref_object(ptr::null_mut(), 0).is_null());
            assert!(pobj_ref_pos(ptr::null_mut()).is_null());
            assert_eq!(pvec_get_len(ptr::null()), 0.0);
            phys_destroy(ptr::null_mut());
        }
    }
}
