//! Growth failures, driven by an allocator that refuses any single allocation
//! above a per-thread byte limit.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;

use cgmath::Vector3;
use voxel_mesher::{build_mesh, Colouring, ConstantColour, EngineState, FloatBuffer, OccupancyGrid};

thread_local! {
    static ALLOCATION_LIMIT: Cell<usize> = const { Cell::new(usize::MAX) };
}

struct CappedAllocator;

fn refused(size: usize) -> bool {
    ALLOCATION_LIMIT
        .try_with(|limit| size > limit.get())
        .unwrap_or(false)
}

unsafe impl GlobalAlloc for CappedAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if refused(layout.size()) {
            return ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if refused(new_size) {
            return ptr::null_mut();
        }
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static ALLOCATOR: CappedAllocator = CappedAllocator;

/// Runs `f` with single allocations on this thread capped at `bytes`.
///
/// Assertions belong outside `f`, since a panic message has to be allocated.
fn with_allocation_limit<T>(bytes: usize, f: impl FnOnce() -> T) -> T {
    ALLOCATION_LIMIT.with(|limit| limit.set(bytes));
    let result = f();
    ALLOCATION_LIMIT.with(|limit| limit.set(usize::MAX));
    result
}

#[test]
fn failed_append_keeps_every_earlier_value() {
    let mut buffer = FloatBuffer::with_capacity(1).unwrap();

    // 256 bytes hold 64 floats; growing past that needs 128.
    let (written, result) = with_allocation_limit(256, || {
        let mut written = 0;
        loop {
            if let Err(err) = buffer.append(written as f32) {
                break (written, Err(err));
            }
            written += 1;
            if written > 1000 {
                break (written, Ok(()));
            }
        }
    });

    let err = result.unwrap_err();
    assert_eq!(err.requested, 128);
    assert_eq!(written, 64);
    assert_eq!(buffer.len(), 64);
    assert_eq!(buffer.capacity(), 64);
    let expected: Vec<f32> = (0..64).map(|i| i as f32).collect();
    assert_eq!(buffer.snapshot(), expected.as_slice());

    // The buffer stays usable once memory is available again.
    buffer.append(64.0).unwrap();
    assert_eq!(buffer.snapshot()[64], 64.0);
}

#[test]
fn failed_build_keeps_partial_output() {
    let grid = OccupancyGrid::solid(Vector3::new(1, 1, 1), 1).unwrap();
    let colouring = ConstantColour::default();

    let mut full_vertices = FloatBuffer::with_capacity(1).unwrap();
    let mut full_colours = FloatBuffer::with_capacity(1).unwrap();
    build_mesh(&grid, &mut full_vertices, &mut full_colours, &colouring).unwrap();

    let mut vertices = FloatBuffer::with_capacity(1).unwrap();
    let mut colours = FloatBuffer::with_capacity(1).unwrap();
    let result = with_allocation_limit(256, || {
        build_mesh(&grid, &mut vertices, &mut colours, &colouring)
    });

    let err = result.unwrap_err();
    assert_eq!(err.requested, 128);
    assert!(!vertices.is_empty());
    assert!(vertices.len() < full_vertices.len());
    assert_eq!(vertices.snapshot(), &full_vertices.snapshot()[..vertices.len()]);
    assert_eq!(colours.snapshot(), &full_colours.snapshot()[..colours.len()]);
}

#[test]
fn failed_rebuild_exposes_no_mesh() {
    let grid = OccupancyGrid::checkerboard(Vector3::new(3, 3, 3), 1).unwrap();
    let mut engine_state = EngineState::new(grid, Colouring::default(), 1).unwrap();

    let result = with_allocation_limit(256, || engine_state.rebuild());

    assert!(result.is_err());
    assert!(engine_state.mesh().vertices.is_empty());
    assert!(engine_state.mesh().colours.is_empty());
    assert_eq!(engine_state.mesh().vertex_count(), 0);
}

#[test]
fn failed_overlay_rebuild_discards_the_new_mesh() {
    // One cell meshes to 144 floats, which the pre-sized buffers hold without
    // growing; the 64-point overlay needs 256 floats (1024 bytes).
    let mut grid = OccupancyGrid::empty(Vector3::new(4, 4, 4)).unwrap();
    grid.set(1, 1, 1, 1).unwrap();
    let mut engine_state = EngineState::new(grid, Colouring::default(), 144).unwrap();
    engine_state.rebuild().unwrap();
    assert_eq!(engine_state.mesh().vertex_count(), 36);

    engine_state.set_debug_geometry(true);
    let result = with_allocation_limit(1000, || engine_state.rebuild());

    assert!(result.is_err());
    assert!(engine_state.mesh().vertices.is_empty());
    assert!(engine_state.mesh().colours.is_empty());
    assert!(engine_state.debug_geometry().unwrap().is_empty());

    // Both recover on the next rebuild.
    let stats = engine_state.rebuild().unwrap();
    assert_eq!(stats.vertices, 36);
    assert!(!engine_state.debug_geometry().unwrap().is_empty());
}
