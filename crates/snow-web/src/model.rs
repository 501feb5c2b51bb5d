//! Asynchronous tree model load: fetch a binary glTF, decode its primitives
//! on the spot and hand them to the frame loop through a shared slot.
//!
//! Fire and forget: the task completes at most once and is unordered with
//! respect to frame ticks. On failure the error is logged and the scene
//! simply renders without the tree.

use crate::render::MeshVertex;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct TreeMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
}

pub type PendingTree = Rc<RefCell<Option<Vec<TreeMesh>>>>;

/// Kick off the one-shot load task. Registered before the frame loop starts;
/// the loop drains `slot` whenever the result lands.
pub fn spawn_load(url: &str, slot: PendingTree) {
    let url = url.to_string();
    spawn_local(async move {
        match fetch_bytes(&url).await.and_then(|b| decode_glb(&b)) {
            Ok(primitives) => {
                log::info!("[model] {url}: {} primitives decoded", primitives.len());
                *slot.borrow_mut() = Some(primitives);
            }
            Err(e) => log::error!("[model] load failed: {e:?}"),
        }
    });
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Decode every mesh primitive of a .glb into flat vertex/index data plus
/// the material's base color factor.
fn decode_glb(bytes: &[u8]) -> anyhow::Result<Vec<TreeMesh>> {
    let doc = gltf::Gltf::from_slice(bytes)?;
    let blob = doc
        .blob
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("glb has no binary chunk"))?;
    let mut primitives = Vec::new();
    for mesh in doc.meshes() {
        for prim in mesh.primitives() {
            let reader = prim.reader(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => Some(blob),
                gltf::buffer::Source::Uri(_) => None,
            });
            let positions: Vec<[f32; 3]> = match reader.read_positions() {
                Some(iter) => iter.collect(),
                None => continue,
            };
            let normals: Vec<[f32; 3]> = reader
                .read_normals()
                .map(|iter| iter.collect())
                .unwrap_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()]);
            let vertices = positions
                .into_iter()
                .zip(normals)
                .map(|(position, normal)| MeshVertex { position, normal })
                .collect::<Vec<_>>();
            let indices: Vec<u32> = match reader.read_indices() {
                Some(iter) => iter.into_u32().collect(),
                None => (0..vertices.len() as u32).collect(),
            };
            let base_color = prim
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();
            primitives.push(TreeMesh {
                vertices,
                indices,
                base_color,
            });
        }
    }
    if primitives.is_empty() {
        anyhow::bail!("glb contained no renderable primitives");
    }
    Ok(primitives)
}
